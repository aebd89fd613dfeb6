use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash, Hasher},
};

use crate::alloc::{Alloc, HeapAlloc};
use crate::chain::Chain;
use crate::error::TableError;
use crate::table::{AddOutcome, Table};

/// A decidedly old-school hashtable: a fixed number of slots picked at
/// construction time, one chain per slot, and a linear walk of whichever
/// chain a key hashes into. No rehashing, no growth; overfill it and the
/// chains get long and the walks get slow, exactly as advertised.
///
/// Every record the table creates is acquired through an injected [`Alloc`]
/// strategy and returned to it, so arenas, pools, and counting strategies
/// get to watch the whole lifecycle.
pub struct ChainedTable<K, V, S = RandomState, A = HeapAlloc>
where
    K: Eq + Hash,
    S: BuildHasher,
    A: Alloc + Clone,
{
    /// One chain record per slot, each acquired through `alloc`.
    slots: Vec<Box<Chain<K, V, A>>>,
    hash_builder: S,
    alloc: A,
    len: usize,
}

impl<K, V> ChainedTable<K, V, RandomState, HeapAlloc>
where
    K: Eq + Hash,
{
    /// Makes a table with `num_slots` chains on a random hasher and the
    /// plain heap strategy.
    pub fn with_slots(num_slots: usize) -> Result<Self, TableError> {
        Self::with_slots_and_hash_builder_and_alloc(num_slots, Default::default(), HeapAlloc)
    }
}

impl<K, V, S> ChainedTable<K, V, S, HeapAlloc>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Makes a table with a caller-picked hasher on the plain heap strategy.
    pub fn with_slots_and_hash_builder(
        num_slots: usize,
        hash_builder: S,
    ) -> Result<Self, TableError> {
        Self::with_slots_and_hash_builder_and_alloc(num_slots, hash_builder, HeapAlloc)
    }
}

impl<K, V, A> ChainedTable<K, V, RandomState, A>
where
    K: Eq + Hash,
    A: Alloc + Clone,
{
    /// Makes a table on a caller-picked memory strategy.
    pub fn with_slots_and_alloc(num_slots: usize, alloc: A) -> Result<Self, TableError> {
        Self::with_slots_and_hash_builder_and_alloc(num_slots, Default::default(), alloc)
    }
}

impl<K, V, S, A> ChainedTable<K, V, S, A>
where
    K: Eq + Hash,
    S: BuildHasher,
    A: Alloc + Clone,
{
    /// The kitchen-sink constructor: slot count, hasher, and memory
    /// strategy.
    ///
    /// Fails with [`TableError::ZeroSlots`] before touching the allocator
    /// when `num_slots` is zero. Every chain record is acquired eagerly; if
    /// the allocator refuses one, the records acquired so far are handed
    /// back in reverse order and [`TableError::AllocationFailed`] comes out.
    /// A failed construction leaves nothing behind.
    pub fn with_slots_and_hash_builder_and_alloc(
        num_slots: usize,
        hash_builder: S,
        alloc: A,
    ) -> Result<Self, TableError> {
        if num_slots == 0 {
            return Err(TableError::ZeroSlots);
        }

        let mut slots = Vec::with_capacity(num_slots);
        for _ in 0..num_slots {
            match alloc.allocate(Chain::new(alloc.clone())) {
                Some(chain) => slots.push(chain),
                None => {
                    while let Some(chain) = slots.pop() {
                        alloc.deallocate(chain);
                    }
                    return Err(TableError::AllocationFailed);
                }
            }
        }

        Ok(ChainedTable {
            slots,
            hash_builder,
            alloc,
            len: 0,
        })
    }

    /// The slot count this table was built with. Never changes.
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Walks every pair in the table. Visiting order is whatever the slots
    /// and chains happen to hold and is not worth depending on.
    pub fn iter(&self) -> Iter<'_, K, V, A> {
        Iter {
            slots: &self.slots,
            slot: 0,
            entry: 0,
        }
    }

    fn slot_index(&self, key: &K) -> usize {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % self.slots.len() as u64) as usize
    }
}

impl<K, V, S, A> Table<K, V> for ChainedTable<K, V, S, A>
where
    K: Eq + Hash,
    S: BuildHasher,
    A: Alloc + Clone,
{
    fn add(&mut self, key: K, value: V) -> Result<AddOutcome, TableError> {
        let index = self.slot_index(&key);
        let chain = &mut self.slots[index];

        if chain.contains(|k| *k == key) {
            return Ok(AddOutcome::AlreadyPresent);
        }

        if !chain.push(key, value) {
            return Err(TableError::AllocationFailed);
        }

        self.len += 1;
        debug_assert_eq!(
            self.len,
            self.slots.iter().map(|chain| chain.len()).sum::<usize>()
        );
        Ok(AddOutcome::Inserted)
    }

    fn get(&self, key: &K) -> Option<&V> {
        let index = self.slot_index(key);
        self.slots[index].find(|k| k == key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.slot_index(key);
        self.slots[index].find_mut(|k| k == key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.slot_index(key);
        let (_key, value) = self.slots[index].remove_where(|k| k == key)?;

        self.len -= 1;
        debug_assert_eq!(
            self.len,
            self.slots.iter().map(|chain| chain.len()).sum::<usize>()
        );
        Some(value)
    }

    fn clear(&mut self) {
        for chain in self.slots.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<K, V, S, A> Drop for ChainedTable<K, V, S, A>
where
    K: Eq + Hash,
    S: BuildHasher,
    A: Alloc + Clone,
{
    /// Tears the whole table down: every chain record goes back to the
    /// allocator, and dropping each chain sends its entry records back too.
    fn drop(&mut self) {
        for chain in self.slots.drain(..) {
            self.alloc.deallocate(chain);
        }
    }
}

/// Iterator over every pair in a [`ChainedTable`], slot by slot.
pub struct Iter<'a, K, V, A>
where
    A: Alloc,
{
    slots: &'a [Box<Chain<K, V, A>>],
    slot: usize,
    entry: usize,
}

impl<'a, K, V, A> Iterator for Iter<'a, K, V, A>
where
    A: Alloc,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(chain) = self.slots.get(self.slot) {
            if let Some(pair) = chain.get_at(self.entry) {
                self.entry += 1;
                return Some(pair);
            }
            self.slot += 1;
            self.entry = 0;
        }

        None
    }
}
