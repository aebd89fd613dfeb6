//! An instrumented allocator that tallies every record it hands out and takes
//! back, with an optional budget past which it refuses. Useful anywhere a
//! tracked memory strategy is wanted; the test suite uses it to check that
//! the table returns exactly as many records as it acquired.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::alloc::Alloc;

struct Counters {
    allocated: AtomicUsize,
    released: AtomicUsize,
    budget: usize,
}

/// An [`Alloc`] that keeps shared tallies of allocate and deallocate calls.
///
/// Clones share the same tallies, so a table and all of its chains report
/// into one place. With a budget set, the strategy refuses every allocation
/// once the budgeted number have succeeded.
#[derive(Clone)]
pub struct CountingAlloc {
    counters: Arc<Counters>,
}

impl CountingAlloc {
    /// A counting strategy with no budget.
    pub fn new() -> Self {
        Self::with_budget(usize::MAX)
    }

    /// A counting strategy that refuses once `budget` allocations have
    /// succeeded.
    pub fn with_budget(budget: usize) -> Self {
        CountingAlloc {
            counters: Arc::new(Counters {
                allocated: AtomicUsize::new(0),
                released: AtomicUsize::new(0),
                budget,
            }),
        }
    }

    /// How many allocations have succeeded so far.
    pub fn allocated(&self) -> usize {
        self.counters.allocated.load(Ordering::Relaxed)
    }

    /// How many records have been handed back so far.
    pub fn released(&self) -> usize {
        self.counters.released.load(Ordering::Relaxed)
    }

    /// Records currently live: allocated minus released.
    pub fn outstanding(&self) -> usize {
        self.allocated() - self.released()
    }
}

impl Default for CountingAlloc {
    fn default() -> Self {
        Self::new()
    }
}

impl Alloc for CountingAlloc {
    fn allocate<T>(&self, value: T) -> Option<Box<T>> {
        if self.counters.allocated.load(Ordering::Relaxed) >= self.counters.budget {
            return None;
        }

        self.counters.allocated.fetch_add(1, Ordering::Relaxed);
        Some(Box::new(value))
    }

    fn deallocate<T>(&self, record: Box<T>) -> T {
        self.counters.released.fetch_add(1, Ordering::Relaxed);
        *record
    }
}

#[cfg(test)]
mod tests {
    use super::CountingAlloc;
    use crate::alloc::Alloc;

    #[test]
    fn tallies_follow_the_records() {
        let alloc = CountingAlloc::new();
        let a = alloc.allocate(1u64).unwrap();
        let b = alloc.allocate(2u64).unwrap();
        assert_eq!(2, alloc.allocated());
        assert_eq!(0, alloc.released());

        assert_eq!(1, alloc.deallocate(a));
        assert_eq!(2, alloc.deallocate(b));
        assert_eq!(2, alloc.released());
        assert_eq!(0, alloc.outstanding());
    }

    #[test]
    fn clones_share_tallies() {
        let alloc = CountingAlloc::new();
        let clone = alloc.clone();

        let record = clone.allocate("shared").unwrap();
        assert_eq!(1, alloc.allocated());

        alloc.deallocate(record);
        assert_eq!(1, clone.released());
    }

    #[test]
    fn budget_refuses_past_the_line() {
        let alloc = CountingAlloc::with_budget(2);
        let a = alloc.allocate(0u8).unwrap();
        let b = alloc.allocate(1u8).unwrap();
        assert!(alloc.allocate(2u8).is_none());
        assert_eq!(2, alloc.allocated());

        alloc.deallocate(a);
        alloc.deallocate(b);
        assert_eq!(0, alloc.outstanding());
    }
}
