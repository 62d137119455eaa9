use crate::chain_table::{ChainTable, Entries, TableError, CAPACITY_FLOOR};

/// A string-keyed, string-valued hash map built on separate chaining.
///
/// Collisions land in per-slot chains; the bucket array doubles when the
/// load factor reaches the growth threshold (0.75 by default) and halves
/// when it drops below 0.25, never shrinking past a capacity of 17.
///
/// Note: this implementation is not thread-safe; the bucket array is
/// exclusively owned by the map.
#[derive(Debug, Clone)]
pub struct ChainMap {
    /// The shared bucket-table core, carrying a value per entry.
    table: ChainTable<String>,
}

impl Default for ChainMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainMap {
    /// Creates an empty map with the default capacity of 17.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY_FLOOR)
    }

    /// Creates an empty map with at least `capacity` buckets. Capacities
    /// below 17 are clamped up to 17. A prime capacity spreads systematic
    /// key patterns better but is not enforced.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { table: ChainTable::new(capacity) }
    }

    /// Sets the load factor at which the map grows, clamped to `[0.30, 0.95]`.
    pub fn set_load_factor_threshold(&mut self, threshold: f64) {
        self.table.set_load_factor_threshold(threshold);
    }

    /// Maps `key` to `value`. An existing key has its value overwritten in
    /// place and returned; a new key is appended to its bucket's chain and
    /// may trigger growth.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] if a computed bucket index
    /// falls outside the bucket array. This is a defensive check and is
    /// unreachable with the built-in hash function; the map is left
    /// unchanged when it fires.
    pub fn set(&mut self, key: String, value: String) -> Result<Option<String>, TableError> {
        self.table.insert(key, value)
    }

    /// Returns the value stored for `key`, or `None` when the key is absent.
    /// Absence is an ordinary result, not an error.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(String::as_str)
    }

    /// Returns whether `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Removes the entry for `key` and reports whether a removal occurred.
    /// A successful removal may trigger a downward resize.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IndexOutOfRange`] if a computed bucket index
    /// falls outside the bucket array (defensive, unreachable with the
    /// built-in hash function).
    pub fn remove(&mut self, key: &str) -> Result<bool, TableError> {
        self.table.remove(key)
    }

    /// Removes every entry. Capacity is re-evaluated afterwards and steps
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

    /// Number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Current load factor (entries divided by capacity).
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Recounts the entries by walking every chain. Always agrees with
    /// [`ChainMap::len`] unless the incremental counter has been corrupted;
    /// exposed as an independent verification of it.
    #[must_use]
    pub fn count_entries(&self) -> usize {
        self.table.count_entries()
    }

    /// Number of buckets currently holding at least one entry.
    #[must_use]
    pub fn occupied_buckets(&self) -> usize {
        self.table.occupied_buckets()
    }

    /// Iterates over `(key, value)` pairs in bucket order, each bucket's
    /// chain in insertion order.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Entries<'_> {
        Entries { inner: self.table.iter() }
    }
}
