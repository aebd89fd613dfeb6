//! A hasher that hands integer keys straight back out, so tests can aim a
//! key at a known slot instead of wherever the random state scatters it.

use std::hash::{BuildHasher, Hasher};

/// Proxies integer keys for themselves.
pub(crate) struct IdentHasher(u64);

impl Hasher for IdentHasher {
    fn write(&mut self, bytes: &[u8]) {
        assert!(bytes.len() <= 8); // only accept integer-sized keys
        for byte in bytes.iter().rev() {
            self.0 = (self.0 << 8) | u64::from(*byte);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Builds new IdentHashers on demand.
pub(crate) struct BuildIdentHasher;

impl BuildHasher for BuildIdentHasher {
    type Hasher = IdentHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentHasher(0)
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, Hash, Hasher};

    use super::BuildIdentHasher;

    #[test]
    fn integer_keys_hash_to_themselves() {
        let mut hasher = BuildIdentHasher.build_hasher();
        0xc8c8_c8c8u64.hash(&mut hasher);
        assert_eq!(0xc8c8_c8c8, hasher.finish());

        let mut hasher = BuildIdentHasher.build_hasher();
        7u64.hash(&mut hasher);
        assert_eq!(7, hasher.finish());
    }
}
