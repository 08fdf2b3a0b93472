//! # strmap
//!
//! Two string-keyed hash tables built from scratch over the same data model.
//!
//! This crate provides two hash map implementations:
//!
//! - `OpenAddressingMap`: one flat slot array, collisions resolved by quadratic
//!   probing, deletions marked with tombstones. Grows at a load factor of 0.5.
//! - `ChainingMap`: one singly linked chain per bucket, collisions resolved by
//!   appending to the chain, deletions unlink the node. Grows at a load factor of 1.0.
//!
//! Both keep a prime capacity, take the hash function as a plain
//! `fn(&str) -> u64` at construction, and implement the [`StringMap`] trait so
//! they can be used interchangeably.
//!
//! ## Basic Usage
//!
//! ```rust
//! use strmap::{OpenAddressingMap, hash_function_1};
//!
//! // Create a new hash map with at least 11 slots
//! let mut map = OpenAddressingMap::new(11, hash_function_1);
//!
//! // Insert values
//! map.put("apple", 1);
//! map.put("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple", 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Interchangeable Usage
//!
//! ```rust
//! use strmap::{ChainingMap, OpenAddressingMap, StringMap, hash_function_2};
//!
//! fn fill<M: StringMap<usize>>(map: &mut M) {
//!     for i in 0..100 {
//!         map.put(format!("key-{i}"), i);
//!     }
//! }
//!
//! let mut open = OpenAddressingMap::new(11, hash_function_2);
//! let mut chained = ChainingMap::new(11, hash_function_2);
//! fill(&mut open);
//! fill(&mut chained);
//!
//! assert_eq!(open.len(), chained.len());
//! assert_eq!(open.get("key-42"), chained.get("key-42"));
//! ```

/// Singly linked chains backing `ChainingMap` buckets
mod chain;
/// Module implementing the separate-chaining hash map
mod chaining;
/// Error returned by checked resizes
mod error;
/// Hash functions accepted by both maps
mod hash;
/// The trait shared by both maps
mod map;
/// Mode finding built on the chaining map
mod mode;
/// Module implementing the open-addressing hash map
mod open_addressing;
/// Prime sizing helpers
mod prime;

pub use chaining::{ChainingMap, Iter as ChainingIter, MAX_CHAIN_LOAD_FACTOR};
pub use error::ResizeError;
pub use hash::{HashFunction, hash_function_1, hash_function_2, std_hash};
pub use map::StringMap;
pub use mode::find_mode;
pub use open_addressing::{Iter as OpenAddressingIter, MAX_LOAD_FACTOR, OpenAddressingMap};
pub use prime::{is_prime, next_prime};
