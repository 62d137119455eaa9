//! Utility traits and constructors for the chained containers.

use crate::{ChainMap, ChainSet, TableError};

/// Extension trait collecting map traversals into owned `Vec`s. All three
/// views share one walk order: bucket order, each bucket's chain in
/// insertion order.
pub trait MapExtensions {
    /// Returns all keys of the map as a `Vec`.
    fn keys(&self) -> Vec<String>;

    /// Returns all values of the map as a `Vec`, in the same order as
    /// [`MapExtensions::keys`].
    fn values(&self) -> Vec<String>;

    /// Returns all key-value pairs of the map as a `Vec`.
    fn entries(&self) -> Vec<(String, String)>;
}

impl MapExtensions for ChainMap {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_string()).collect()
    }

    fn values(&self) -> Vec<String> {
        self.iter().map(|(_, value)| value.to_string()).collect()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
    }
}

/// Extension trait collecting set traversals into owned `Vec`s.
pub trait SetExtensions {
    /// Returns all keys of the set as a `Vec`, in bucket order.
    fn keys(&self) -> Vec<String>;
}

impl SetExtensions for ChainSet {
    fn keys(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

/// Builds a [`ChainMap`] from an iterator of key-value pairs. Later pairs
/// overwrite earlier ones with the same key.
///
/// # Errors
///
/// Propagates [`TableError::IndexOutOfRange`] from the underlying inserts
/// (defensive, unreachable with the built-in hash function).
pub fn map_from_pairs<I>(pairs: I) -> Result<ChainMap, TableError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut map = ChainMap::new();
    for (key, value) in pairs {
        map.set(key, value)?;
    }
    Ok(map)
}

/// Builds a [`ChainSet`] from an iterator of keys, ignoring duplicates.
///
/// # Errors
///
/// Propagates [`TableError::IndexOutOfRange`] from the underlying inserts
/// (defensive, unreachable with the built-in hash function).
pub fn set_from_keys<I>(keys: I) -> Result<ChainSet, TableError>
where
    I: IntoIterator<Item = String>,
{
    let mut set = ChainSet::new();
    for key in keys {
        set.add(key)?;
    }
    Ok(set)
}
