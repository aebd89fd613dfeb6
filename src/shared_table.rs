use parking_lot::RwLock;
use std::{hash::Hash, marker::PhantomData, sync::Arc};

use crate::error::TableError;
use crate::table::{AddOutcome, Table};

/// Wrapper for a table which is shareable across thread boundaries.
///
/// The whole structure sits behind one lock, which is exactly the external
/// synchronization a [`ChainedTable`](crate::ChainedTable) asks its callers
/// for. Values come out cloned so the lock is held no longer than the
/// lookup.
pub struct SharedTable<T, K, V>(
    Arc<RwLock<T>>,
    PhantomData<K>,
    PhantomData<V>,
)
where
    T: Table<K, V>,
    K: Eq + Hash,
    V: Clone;

impl<T, K, V> SharedTable<T, K, V>
where
    T: Table<K, V>,
    K: Eq + Hash,
    V: Clone,
{
    /// Wraps a table into a shared accessor, making it safe to move across
    /// thread boundaries. Enforces an additional constraint of Clone on
    /// values.
    pub fn with_table(table: T) -> Self {
        Self(Arc::from(RwLock::from(table)), PhantomData, PhantomData)
    }

    /// Adds a pair through the write lock.
    pub fn add(&self, key: K, value: V) -> Result<AddOutcome, TableError> {
        self.0.write().add(key, value)
    }

    /// Gets a clone of the value stored under a key.
    pub fn get(&self, key: &K) -> Option<V> {
        self.0.read().get(key).cloned()
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.0.read().contains(key)
    }

    /// Removes a pair, handing back its value if it was there.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.0.write().remove(key)
    }

    /// Empties the table.
    pub fn clear(&self) {
        self.0.write().clear()
    }

    /// The number of pairs at present.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Whether the table stores nothing at all.
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl<T, K, V> Clone for SharedTable<T, K, V>
where
    T: Table<K, V>,
    K: Eq + Hash,
    V: Clone,
{
    fn clone(&self) -> Self {
        SharedTable(self.0.clone(), PhantomData, PhantomData)
    }
}
