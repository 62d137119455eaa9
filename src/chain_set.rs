use crate::chain_table::{ChainTable, Keys, TableError, CAPACITY_FLOOR};

/// A set of unique strings built on the same chained bucket table as
/// [`ChainMap`](crate::ChainMap), with entries carrying no value.
///
/// Duplicate keys are rejected silently: adding one is a no-op that leaves
/// the size untouched. Resizing behaves exactly as in the map — double at a
/// load factor of 0.75, halve below 0.25, floor capacity of 17.
#[derive(Debug, Clone)]
pub struct ChainSet {
    /// The shared bucket-table core with valueless entries.
    table: ChainTable<()>,
}

impl Default for ChainSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainSet {
    /// Creates an empty set with the default capacity of 17.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY_FLOOR)
    }

    /// Creates an empty set with at least `capacity` buckets (clamped up to
    /// 17).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { table: ChainTable::new(capacity) }
    }

    /// Sets the load factor at which the set grows, clamped to `[0.30, 0.95]`.
    pub fn set_load_factor_threshold(&mut self, threshold: f64) {
        self.table.set_load_factor_threshold(threshold);
    }

    /// Adds `key` to the set. Returns `true` if the key was newly added and
    /// `false` if it was already present (in which case nothing changes).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] if a computed bucket index
    /// falls outside the bucket array (defensive, unreachable with the
    /// built-in hash function); the set is left unchanged when it fires.
    pub fn add(&mut self, key: String) -> Result<bool, TableError> {
        Ok(self.table.insert(key, ())?.is_none())
    }

    /// Returns whether `key` is in the set.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Removes `key` and reports whether a removal occurred. A successful
    /// removal may trigger a downward resize.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] if a computed bucket index
    /// falls outside the bucket array (defensive, unreachable with the
    /// built-in hash function).
    pub fn remove(&mut self, key: &str) -> Result<bool, TableError> {
        self.table.remove(key)
    }

    /// Removes every key. Capacity is re-evaluated afterwards and steps
    /// down toward the floor of 17 if it was above it.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] if the downward rehash
    /// computes an out-of-range index (defensive, unreachable with the
    /// built-in hash function).
    pub fn clear(&mut self) -> Result<(), TableError> {
        self.table.clear()
    }

    /// Number of keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the set holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Current load factor (keys divided by capacity).
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Recounts the keys by walking every chain, independently of the
    /// incrementally maintained counter that [`ChainSet::len`] reads.
    #[must_use]
    pub fn count_entries(&self) -> usize {
        self.table.count_entries()
    }

    /// Number of buckets currently holding at least one key.
    #[must_use]
    pub fn occupied_buckets(&self) -> usize {
        self.table.occupied_buckets()
    }

    /// Iterates over the keys in bucket order, each bucket's chain in
    /// insertion order.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Keys<'_> {
        Keys { inner: self.table.iter() }
    }
}
