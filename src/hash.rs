//! Hash functions accepted by the maps.
//!
//! The maps only ever reduce a hash with `hash % capacity`, so any function of
//! this shape works, including deliberately weak ones that collide often.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// Signature of a caller-supplied hash function.
pub type HashFunction = fn(&str) -> u64;

/// Sums the code points of `key`.
///
/// Anagrams collide, which makes this useful for exercising collision paths.
#[must_use]
pub fn hash_function_1(key: &str) -> u64 {
    key.chars().fold(0_u64, |hash, letter| hash.wrapping_add(u64::from(letter)))
}

/// Sums each code point weighted by its one-based position in `key`.
#[must_use]
pub fn hash_function_2(key: &str) -> u64 {
    key.chars().zip(1_u64..).fold(0_u64, |hash, (letter, position)| {
        hash.wrapping_add(position.wrapping_mul(u64::from(letter)))
    })
}

/// Hashes `key` with the standard library's `DefaultHasher`.
#[must_use]
pub fn std_hash(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
