use std::mem;

use log::{debug, trace};

/// Smallest bucket-array capacity the table will ever use; downward resizes
/// stop here no matter how many entries are removed.
pub(crate) const CAPACITY_FLOOR: usize = 17;

/// Default load factor at or above which the table doubles its capacity.
pub(crate) const DEFAULT_LOAD_FACTOR_HIGH: f64 = 0.75;

/// Load factor below which the table halves its capacity (down to the floor).
const LOAD_FACTOR_LOW: f64 = 0.25;

/// Multiplier for the polynomial rolling hash.
const HASH_PRIME: u128 = 31;

/// The entries that hashed to one slot, in insertion order.
type Chain<V> = Vec<(String, V)>;

/// Error raised by table mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A computed bucket index fell outside the bucket array. Unreachable
    /// with a correct hash function, but checked on every mutation rather
    /// than risking an out-of-bounds access.
    #[error("bucket index {index} is out of bounds for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Capacity of the bucket array at the time of the failure.
        capacity: usize,
    },
}

/// Reduces `key` to a bucket index in `[0, capacity)` with a polynomial
/// rolling hash over the key's bytes.
///
/// The modulus is applied on every step rather than once at the end, so the
/// accumulator stays below `capacity` and the widened intermediates cannot
/// overflow for any key length. The empty key hashes to 0.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn bucket_index(key: &str, capacity: usize) -> usize {
    // Capacity never drops below the floor, so the modulus is non-zero.
    let modulus = u128::from(capacity as u64);
    let mut accumulator: u128 = 0;
    for byte in key.bytes() {
        accumulator = (HASH_PRIME * accumulator + u128::from(byte)) % modulus;
    }
    // The accumulator is strictly below `capacity`, so the cast is lossless.
    accumulator as usize
}

/// The bucket-table core shared by the map and set containers.
///
/// Collisions are resolved by separate chaining: each slot holds a chain of
/// entries appended in insertion order, and a slot whose chain empties is
/// dropped back to `None` so it is indistinguishable from one that was never
/// populated. The map stores `String` values; the set instantiates `V = ()`.
#[derive(Debug, Clone)]
pub(crate) struct ChainTable<V> {
    /// The bucket array; `None` is an absent slot with no chain.
    buckets: Vec<Option<Chain<V>>>,
    /// Number of live entries, maintained incrementally on every mutation.
    item_count: usize,
    /// Load factor at or above which the table grows.
    load_factor_high: f64,
}

impl<V: Clone> ChainTable<V> {
    /// Creates a table with at least `capacity` slots (clamped up to the
    /// floor of 17) and the default growth threshold.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buckets: Self::empty_buckets(capacity.max(CAPACITY_FLOOR)),
            item_count: 0,
            load_factor_high: DEFAULT_LOAD_FACTOR_HIGH,
        }
    }

    /// Allocates a bucket array of `capacity` absent slots.
    fn empty_buckets(capacity: usize) -> Vec<Option<Chain<V>>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        buckets
    }

    /// Sets the growth threshold, clamped to stay above the fixed shrink
    /// trigger of 0.25 and below saturation.
    pub(crate) fn set_load_factor_threshold(&mut self, threshold: f64) {
        self.load_factor_high = threshold.clamp(0.30, 0.95);
    }

    /// Inserts `key` with `value`, overwriting in place when the key is
    /// already present. Returns the replaced value on overwrite, `None` on a
    /// fresh insert. A fresh insert bumps the item count and runs the grow
    /// check.
    pub(crate) fn insert(&mut self, key: String, value: V) -> Result<Option<V>, TableError> {
        let capacity = self.buckets.len();
        let index = bucket_index(&key, capacity);
        let Some(slot) = self.buckets.get_mut(index) else {
            return Err(TableError::IndexOutOfRange { index, capacity });
        };
        match slot {
            Some(chain) => {
                if let Some(entry) = chain.iter_mut().find(|entry| entry.0 == key) {
                    trace!("key {key:?} already exists in the table, overwriting in place");
                    return Ok(Some(mem::replace(&mut entry.1, value)));
                }
                chain.push((key, value));
            }
            None => *slot = Some(vec![(key, value)]),
        }
        self.item_count = self.item_count.saturating_add(1);
        self.grow_if_needed()?;
        Ok(None)
    }

    /// Returns the value stored for `key`, or `None` when absent.
    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        let index = bucket_index(key, self.buckets.len());
        let chain = self.buckets.get(index)?.as_ref()?;
        chain.iter().find(|entry| entry.0 == key).map(|(_, value)| value)
    }

    /// Returns whether an entry for `key` exists.
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, preserving the relative order of the
    /// rest of its chain and dropping the slot when the chain empties.
    /// Returns whether a removal occurred; a successful removal runs the
    /// shrink check.
    pub(crate) fn remove(&mut self, key: &str) -> Result<bool, TableError> {
        let capacity = self.buckets.len();
        let index = bucket_index(key, capacity);
        let Some(slot) = self.buckets.get_mut(index) else {
            return Err(TableError::IndexOutOfRange { index, capacity });
        };
        if let Some(chain) = slot {
            if let Some(position) = chain.iter().position(|entry| entry.0 == key) {
                chain.remove(position);
                if chain.is_empty() {
                    *slot = None;
                }
                self.item_count = self.item_count.saturating_sub(1);
                self.shrink_if_needed()?;
                trace!("removed entry for key {key:?}");
                return Ok(true);
            }
        }
        trace!("remove: key {key:?} was not found");
        Ok(false)
    }

    /// Drops every slot, returning the item count to 0, then runs the shrink
    /// check. Capacity steps toward the floor one halving at a time.
    pub(crate) fn clear(&mut self) -> Result<(), TableError> {
        for slot in &mut self.buckets {
            if let Some(chain) = slot.take() {
                self.item_count = self.item_count.saturating_sub(chain.len());
            }
        }
        self.shrink_if_needed()
    }

    /// Number of live entries, from the incrementally maintained counter.
    pub(crate) fn len(&self) -> usize {
        self.item_count
    }

    /// Returns true when the table holds no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Current capacity of the bucket array.
    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Current load factor, derived from the live counts.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub(crate) fn load_factor(&self) -> f64 {
        self.item_count as f64 / self.buckets.len() as f64
    }

    /// Number of live entries recomputed by walking every chain, independent
    /// of the maintained counter.
    pub(crate) fn count_entries(&self) -> usize {
        self.buckets.iter().flatten().map(Vec::len).sum()
    }

    /// Number of slots currently holding a chain.
    pub(crate) fn occupied_buckets(&self) -> usize {
        self.buckets.iter().flatten().count()
    }

    /// Iterates over all entries in bucket order, each slot's chain in
    /// insertion order.
    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, offset: 0 }
    }

    /// Doubles the capacity and rehashes when the load factor has reached
    /// the growth threshold.
    fn grow_if_needed(&mut self) -> Result<(), TableError> {
        if self.load_factor() >= self.load_factor_high {
            debug!(
                "resizing up: load factor {:.3} reached threshold {:.2}",
                self.load_factor(),
                self.load_factor_high
            );
            let new_capacity = self.buckets.len().saturating_mul(2);
            self.rehash(new_capacity)?;
            debug!("capacity increased to {new_capacity}");
        }
        Ok(())
    }

    /// Halves the capacity (never below the floor) and rehashes when the
    /// load factor has dropped below the shrink trigger.
    fn shrink_if_needed(&mut self) -> Result<(), TableError> {
        if self.load_factor() < LOAD_FACTOR_LOW && self.buckets.len() > CAPACITY_FLOOR {
            debug!(
                "resizing down: load factor {:.3} dropped below {LOAD_FACTOR_LOW}",
                self.load_factor()
            );
            let new_capacity = (self.buckets.len() / 2).max(CAPACITY_FLOOR);
            self.rehash(new_capacity)?;
            debug!("capacity decreased to {new_capacity}");
        }
        Ok(())
    }

    /// Migrates every entry into a freshly allocated bucket array of
    /// `new_capacity` slots, recomputing each index against the new capacity.
    /// Entries are visited in old-table bucket order and the swap happens
    /// only once the replacement array is complete, so the old table stays
    /// intact if the defensive bounds check ever fires.
    fn rehash(&mut self, new_capacity: usize) -> Result<(), TableError> {
        let mut new_buckets = Self::empty_buckets(new_capacity);
        for (key, value) in self.buckets.iter().flatten().flat_map(|chain| chain.iter()) {
            let index = bucket_index(key, new_capacity);
            let Some(slot) = new_buckets.get_mut(index) else {
                return Err(TableError::IndexOutOfRange { index, capacity: new_capacity });
            };
            slot.get_or_insert_with(Chain::new).push((key.clone(), value.clone()));
        }
        self.buckets = new_buckets;
        Ok(())
    }
}

/// Iterator over all entries of a table in bucket order, each chain in
/// insertion order. Pure query: it borrows the table and retains no cursor
/// state in the table itself.
#[derive(Debug, Clone)]
pub(crate) struct Iter<'a, V> {
    /// Slots not yet fully traversed; the front slot is the current one.
    buckets: &'a [Option<Chain<V>>],
    /// Position within the front slot's chain.
    offset: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (front, rest) = self.buckets.split_first()?;
            if let Some(chain) = front {
                if let Some((key, value)) = chain.get(self.offset) {
                    self.offset = self.offset.saturating_add(1);
                    return Some((key.as_str(), value));
                }
            }
            self.buckets = rest;
            self.offset = 0;
        }
    }
}

/// Iterator over the key-value pairs of a map in bucket order.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    /// Underlying whole-table traversal.
    pub(crate) inner: Iter<'a, String>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value.as_str()))
    }
}

/// Iterator over the keys of a set in bucket order.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    /// Underlying whole-table traversal.
    pub(crate) inner: Iter<'a, ()>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index_in_range() {
        for key in ["apple", "banana", "carrot", "a much longer key than usual"] {
            let index = bucket_index(key, 17);
            assert!(index < 17, "index {index} out of range for key {key:?}");
        }
    }

    #[test]
    fn test_empty_key_hashes_to_zero() {
        assert_eq!(bucket_index("", 17), 0);
        assert_eq!(bucket_index("", 34), 0);
    }

    #[test]
    fn test_index_tracks_capacity() {
        // 31 * 0 + 'a' = 97: small keys reduce to their byte value.
        assert_eq!(bucket_index("a", 17), 97 % 17);
        assert_eq!(bucket_index("a", 34), 97 % 34);
    }

    #[test]
    fn test_capacity_clamped_to_floor() {
        let table: ChainTable<String> = ChainTable::new(1);
        assert_eq!(table.capacity(), 17);

        let table: ChainTable<String> = ChainTable::new(64);
        assert_eq!(table.capacity(), 64);
    }

    #[test]
    fn test_insert_and_overwrite() {
        let mut table = ChainTable::new(17);
        assert_eq!(table.insert("apple".to_string(), 1), Ok(None));
        assert_eq!(table.insert("apple".to_string(), 2), Ok(Some(1)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("apple"), Some(&2));
    }

    #[test]
    fn test_empty_chain_slot_is_dropped() {
        let mut table = ChainTable::new(17);
        assert_eq!(table.insert("apple".to_string(), 1), Ok(None));
        assert_eq!(table.occupied_buckets(), 1);

        assert_eq!(table.remove("apple"), Ok(true));
        assert_eq!(table.occupied_buckets(), 0);
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_count_entries_matches_counter() {
        let mut table = ChainTable::new(17);
        for i in 0..10 {
            assert_eq!(table.insert(format!("key-{i}"), i), Ok(None));
        }
        assert_eq!(table.count_entries(), table.len());

        assert_eq!(table.remove("key-3"), Ok(true));
        assert_eq!(table.count_entries(), table.len());
        assert_eq!(table.count_entries(), 9);
    }

    #[test]
    fn test_rehash_preserves_entries() {
        let mut table = ChainTable::new(17);
        for i in 0..30 {
            assert_eq!(table.insert(format!("key-{i}"), i), Ok(None));
        }
        assert!(table.capacity() > 17);
        for i in 0..30 {
            assert_eq!(table.get(&format!("key-{i}")), Some(&i));
        }
        assert_eq!(table.count_entries(), 30);
    }

    #[test]
    fn test_iter_walks_buckets_in_order() {
        let mut table = ChainTable::new(17);
        assert_eq!(table.insert("a".to_string(), 1), Ok(None));
        assert_eq!(table.insert("b".to_string(), 2), Ok(None));

        // "a" = 97 -> slot 12, "b" = 98 -> slot 13 at capacity 17.
        let entries: Vec<(&str, &i32)> = table.iter().collect();
        assert_eq!(entries, vec![("a", &1), ("b", &2)]);

        // Restartable: a second traversal yields the same sequence.
        let again: Vec<(&str, &i32)> = table.iter().collect();
        assert_eq!(entries, again);
    }
}
