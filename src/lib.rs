//! # Chaintable
//!
//! A string-keyed hash map and hash set built on separate chaining with
//! load-factor driven resizing.
//!
//! This crate provides two containers over one shared bucket-table core:
//!
//! - `ChainMap`: key → value storage with overwrite-in-place semantics
//! - `ChainSet`: unique keys only, duplicate adds are silent no-ops
//!
//! Both hash keys with a polynomial rolling hash reduced modulo the current
//! capacity, resolve collisions by chaining entries within a bucket, double
//! their capacity when the load factor reaches 0.75, and halve it when the
//! load factor falls below 0.25 — never below the floor capacity of 17.
//!
//! ## Map Usage
//!
//! ```rust
//! use chaintable::ChainMap;
//!
//! let mut map = ChainMap::new();
//!
//! // Insert values
//! assert_eq!(map.set("apple".to_string(), "red".to_string())?, None);
//! assert_eq!(map.set("banana".to_string(), "yellow".to_string())?, None);
//! assert_eq!(map.get("apple"), Some("red"));
//!
//! // Overwrite in place: the size stays the same
//! let previous = map.set("apple".to_string(), "green".to_string())?;
//! assert_eq!(previous, Some("red".to_string()));
//! assert_eq!(map.get("apple"), Some("green"));
//! assert_eq!(map.len(), 2);
//!
//! // Missing keys are an ordinary result, not an error
//! assert_eq!(map.get("tiger"), None);
//!
//! // Remove reports whether anything was removed
//! assert!(map.remove("apple")?);
//! assert!(!map.remove("apple")?);
//! # Ok::<(), chaintable::TableError>(())
//! ```
//!
//! ## Set Usage
//!
//! ```rust
//! use chaintable::ChainSet;
//!
//! let mut set = ChainSet::new();
//!
//! assert!(set.add("apple".to_string())?);
//! // A duplicate add changes nothing
//! assert!(!set.add("apple".to_string())?);
//! assert_eq!(set.len(), 1);
//! assert!(set.has("apple"));
//! # Ok::<(), chaintable::TableError>(())
//! ```

/// Module implementing the string-keyed map container
mod chain_map;
/// Module implementing the unique-key set container
mod chain_set;
/// Module implementing the shared chained bucket table and its hash function
mod chain_table;
/// Utility traits and constructors for both containers
mod utils;

pub use chain_map::ChainMap;
pub use chain_set::ChainSet;
pub use chain_table::{Entries, Keys, TableError};
pub use utils::{map_from_pairs, set_from_keys, MapExtensions, SetExtensions};
