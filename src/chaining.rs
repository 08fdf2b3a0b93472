use std::{fmt, iter::FusedIterator, mem};

use crate::{
    ResizeError, StringMap,
    chain::{Chain, ChainIter},
    hash::{HashFunction, hash_function_1},
    prime::{next_prime, prime_at_least},
};

/// Load factor at which `put` doubles the bucket array before inserting
pub const MAX_CHAIN_LOAD_FACTOR: f64 = 1.0;

/// Requested capacity used by `Default` and `FromIterator`
const DEFAULT_CAPACITY: usize = 11;

/// A string-keyed hash table using separate chaining.
///
/// Every bucket owns a singly linked chain of the entries that hash to it. New
/// keys are appended to the tail of their chain and removal unlinks the node,
/// so there are no tombstones. The bucket array doubles (rounded up to a
/// prime) before any insert that finds the load factor at or above
/// [`MAX_CHAIN_LOAD_FACTOR`].
///
/// ```rust
/// use strmap::{ChainingMap, hash_function_2};
///
/// let mut map = ChainingMap::new(53, hash_function_2);
/// map.put("key1", 10);
/// map.put("key1", 30);
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("key1"), Some(&30));
/// ```
#[derive(Clone)]
pub struct ChainingMap<V> {
    /// One chain per bucket; the vector length is the capacity
    buckets: Vec<Chain<V>>,
    /// Number of entries across all chains
    size: usize,
    /// Caller-supplied hash function
    hash_function: HashFunction,
}

/// Builds `capacity` empty chains
fn empty_chains<V>(capacity: usize) -> Vec<Chain<V>> {
    let mut chains = Vec::with_capacity(capacity);
    chains.resize_with(capacity, Chain::default);
    chains
}

impl<V> Default for ChainingMap<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, hash_function_1)
    }
}

impl<V> Extend<(String, V)> for ChainingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(String, V)> for ChainingMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<V> ChainingMap<V> {
    /// Creates an empty map with `next_prime(capacity)` buckets
    #[must_use]
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self { buckets: empty_chains(next_prime(capacity)), size: 0, hash_function }
    }

    /// Gets the bucket index for a key
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn get_index(&self, key: &str) -> usize {
        ((self.hash_function)(key) % self.buckets.len() as u64) as usize
    }

    /// Chain that `key` hashes to
    fn chain(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets.get(self.get_index(key))
    }

    /// Mutable chain that `key` hashes to
    fn chain_mut(&mut self, key: &str) -> Option<&mut Chain<V>> {
        let index = self.get_index(key);
        self.buckets.get_mut(index)
    }

    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// Returns the previous value if the key was already present.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        if self.table_load() >= MAX_CHAIN_LOAD_FACTOR {
            self.resize_table(self.capacity().saturating_mul(2));
        }

        let key = key.into();
        let chain = self.chain_mut(&key)?;
        if let Some(existing) = chain.find_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        chain.push_back(key, value);
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieve a value for a given key
    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key)?.find(key)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain_mut(key)?.find_mut(key)
    }

    /// Returns true if `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Unlinks `key` from its chain and returns its value.
    ///
    /// Removing an absent key does nothing.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.chain_mut(key)?.remove(key)?;
        self.size = self.size.saturating_sub(1);
        Some(value)
    }

    /// Replaces every chain with an empty one, keeping the capacity
    pub fn clear(&mut self) {
        self.buckets = empty_chains(self.buckets.len());
        self.size = 0;
    }

    /// Rebuilds the table with at least `new_capacity` buckets.
    ///
    /// Does nothing when `new_capacity` is zero. Unlike the open-addressing
    /// table, the target may be smaller than the number of entries.
    /// See [`try_resize_table`](Self::try_resize_table).
    pub fn resize_table(&mut self, new_capacity: usize) {
        let _ = self.try_resize_table(new_capacity);
    }

    /// Rebuilds the table with `new_capacity` buckets, rounded up to a prime.
    ///
    /// Entries are re-inserted bucket by bucket with [`put`](Self::put), so a
    /// target that leaves the load at or above [`MAX_CHAIN_LOAD_FACTOR`] grows
    /// again while rebuilding.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::BelowMinimum`] and leaves the table untouched if
    /// `new_capacity` is zero.
    pub fn try_resize_table(&mut self, new_capacity: usize) -> Result<(), ResizeError> {
        if new_capacity < 1 {
            return Err(ResizeError::BelowMinimum { requested: new_capacity });
        }

        let old = mem::replace(&mut self.buckets, empty_chains(prime_at_least(new_capacity)));
        self.size = 0;

        for mut chain in old {
            for (key, value) in chain.drain() {
                self.put(key, value);
            }
        }

        Ok(())
    }

    /// Returns the current load factor of the table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of buckets whose chain is empty
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Length of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::len).max().unwrap_or(0)
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets, always prime
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns an iterator over entries in bucket order, then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), chain: None }
    }
}

impl<V: Clone> ChainingMap<V> {
    /// Copies every `(key, value)` pair out in bucket order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)> {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }
}

impl<V> StringMap<V> for ChainingMap<V> {
    fn put(&mut self, key: String, value: V) -> Option<V> {
        Self::put(self, key, value)
    }

    fn get(&self, key: &str) -> Option<&V> {
        Self::get(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        Self::remove(self, key)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn resize_table(&mut self, new_capacity: usize) {
        Self::resize_table(self, new_capacity);
    }

    fn len(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn empty_buckets(&self) -> usize {
        Self::empty_buckets(self)
    }

    fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }
}

impl<V> fmt::Debug for ChainingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainingMap")
            .field("size", &self.size)
            .field("capacity", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

/// One line per bucket: `index: SLL [key: value -> ...]`
impl<V: fmt::Display> fmt::Display for ChainingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            writeln!(f, "{index}: {chain}")?;
        }
        Ok(())
    }
}

/// Iterator over the entries of a [`ChainingMap`]
#[derive(Debug)]
pub struct Iter<'a, V> {
    /// Buckets not yet visited
    buckets: std::slice::Iter<'a, Chain<V>>,
    /// Chain currently being walked
    chain: Option<ChainIter<'a, V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

#[allow(single_use_lifetimes)]
impl<'a, V> IntoIterator for &'a ChainingMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hash_function_2, is_prime};

    /// Rounds to two decimals, matching the walkthrough output
    fn round2(x: f64) -> f64 {
        (x * 100.0).round() / 100.0
    }

    #[test]
    fn test_put_and_get() {
        let mut map = ChainingMap::new(31, hash_function_1);
        assert_eq!(map.get("key"), None);
        assert_eq!(map.put("key1", 10), None);
        assert_eq!(map.get("key1"), Some(&10));
    }

    #[test]
    fn test_update_keeps_size() {
        let mut map = ChainingMap::new(101, hash_function_1);
        map.put("key1", 10);
        map.put("key2", 20);
        assert_eq!(map.put("key1", 30), Some(10));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("key1"), Some(&30));
        assert_eq!(map.empty_buckets(), 99);
    }

    #[test]
    fn test_empty_buckets_with_shared_chain() {
        let mut map = ChainingMap::new(101, hash_function_1);
        assert_eq!((map.empty_buckets(), map.len(), map.capacity()), (101, 0, 101));
        map.put("key1", 10);
        map.put("key2", 20);
        map.put("key1", 30);
        map.put("key4", 40);
        assert_eq!((map.empty_buckets(), map.len(), map.capacity()), (98, 3, 101));

        // Anagrams share a chain under hash_function_1
        map.put("1yek", 50);
        assert_eq!((map.empty_buckets(), map.len()), (98, 4));
        assert_eq!(map.longest_chain(), 2);
    }

    #[test]
    fn test_put_resizes_at_full_load() {
        let mut map = ChainingMap::new(53, hash_function_1);
        let mut checkpoints = Vec::new();
        for i in 0..150 {
            let load_before = map.table_load();
            let capacity_before = map.capacity();
            map.put(format!("str{i}"), i * 100);
            if load_before >= MAX_CHAIN_LOAD_FACTOR {
                assert!(map.capacity() > capacity_before);
            }
            if i % 25 == 24 {
                let load = round2(map.table_load());
                checkpoints.push((map.empty_buckets(), load, map.len(), map.capacity()));
            }
        }

        assert_eq!(
            checkpoints,
            vec![
                (39, 0.47, 25, 53),
                (39, 0.94, 50, 53),
                (82, 0.7, 75, 107),
                (79, 0.93, 100, 107),
                (184, 0.56, 125, 223),
                (181, 0.67, 150, 223),
            ]
        );
    }

    #[test]
    fn test_remove() {
        let mut map = ChainingMap::new(53, hash_function_1);
        map.put("key1", 10);
        map.put("1key", 11);

        assert_eq!(map.remove("key1"), Some(10));
        assert_eq!(map.get("key1"), None);
        assert_eq!(map.get("1key"), Some(&11));
        assert_eq!(map.remove("key4"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_resize_table() {
        let mut map = ChainingMap::new(20, hash_function_1);
        map.put("key1", 10);
        assert_eq!((map.len(), map.capacity()), (1, 23));

        map.resize_table(30);
        assert_eq!((map.len(), map.capacity()), (1, 31));
        assert!(map.contains_key("key1"));
    }

    #[test]
    fn test_resize_to_zero_is_refused() {
        let mut map = ChainingMap::new(11, hash_function_2);
        map.put("a", 1);

        assert_eq!(map.try_resize_table(0), Err(ResizeError::BelowMinimum { requested: 0 }));
        assert_eq!(map.capacity(), 11);
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_resize_below_size_is_allowed() {
        let mut map = ChainingMap::new(53, hash_function_2);
        for i in 0..20 {
            map.put(i.to_string(), i);
        }

        assert_eq!(map.try_resize_table(2), Ok(()));
        assert!(is_prime(map.capacity()));
        assert_eq!(map.len(), 20);
        for i in 0..20 {
            assert_eq!(map.get(&i.to_string()), Some(&i));
        }
    }

    #[test]
    fn test_resize_preserves_contents() {
        let mut map = ChainingMap::new(75, hash_function_2);
        let keys: Vec<usize> = (1..1000).step_by(13).collect();
        for &key in &keys {
            map.put(key.to_string(), key * 42);
        }
        assert_eq!((map.len(), map.capacity()), (77, 79));

        for capacity in (111..1000).step_by(117) {
            map.resize_table(capacity);

            map.put("some key", 0);
            assert!(map.contains_key("some key"));
            map.remove("some key");

            for &key in &keys {
                assert_eq!(map.get(&key.to_string()), Some(&(key * 42)));
                assert!(!map.contains_key(&(key + 1).to_string()));
            }
            assert_eq!(map.len(), keys.len());
            assert!(map.capacity() >= capacity);
        }
    }

    #[test]
    fn test_clear() {
        let mut map = ChainingMap::new(53, hash_function_1);
        map.put("key1", 10);
        map.put("key2", 20);
        map.resize_table(100);
        assert_eq!((map.len(), map.capacity()), (2, 101));

        map.clear();

        assert_eq!((map.len(), map.capacity()), (0, 101));
        assert_eq!(map.empty_buckets(), 101);
    }

    #[test]
    fn test_iter_walks_buckets_then_chains() {
        let mut map = ChainingMap::new(3, hash_function_1);
        map.put("ab", 1);
        map.put("ba", 2);
        map.put("c", 3);

        // 195 % 3 == 0 and 99 % 3 == 0, so all three share the first chain
        let items: Vec<(&str, &i32)> = map.iter().collect();
        assert_eq!(items, vec![("ab", &1), ("ba", &2), ("c", &3)]);
        assert_eq!((&map).into_iter().count(), 3);
    }

    #[test]
    fn test_display_dump() {
        let mut map = ChainingMap::new(3, hash_function_1);
        map.put("ab", 1);
        map.put("ba", 2);
        // 195 % 3 == 0
        assert_eq!(map.to_string(), "0: SLL [ab: 1 -> ba: 2]\n1: SLL []\n2: SLL []\n");
    }

    #[test]
    fn test_get_mut() {
        let mut map = ChainingMap::default();
        map.put("key1", 1);

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
        assert_eq!(map.capacity(), 11);
    }

    #[test]
    fn test_clone_single_bucket_map() {
        let mut map = ChainingMap::new(3, |_| 0);
        for i in 0..2_000 {
            map.put(i.to_string(), i);
        }
        assert_eq!(map.longest_chain(), 2_000);

        let copy = map.clone();
        assert_eq!(copy.len(), 2_000);
        assert_eq!(copy.longest_chain(), 2_000);
        assert!(copy.iter().eq(map.iter()));

        map.remove("0");
        assert_eq!(copy.get("0"), Some(&0));
        assert!(format!("{copy:?}").starts_with("ChainingMap { size: 2000,"));
    }

    #[test]
    fn test_empty_map() {
        let map: ChainingMap<i32> = ChainingMap::new(1, hash_function_1);
        assert_eq!(map.capacity(), 3);
        assert_eq!(map.len(), 0);
        assert!(map.table_load().abs() < f64::EPSILON);
        assert_eq!(map.get("anything"), None);
        assert_eq!(map.longest_chain(), 0);
        assert_eq!(map.iter().next(), None);
    }

    proptest::proptest! {
        #[test]
        fn behaves_like_std_hashmap(
            ops in proptest::collection::vec((0u8..4, "[a-f]{1,3}", 0i32..100), 0..200)
        ) {
            let mut map = ChainingMap::new(1, hash_function_1);
            let mut model = std::collections::HashMap::new();
            for (op, key, value) in ops {
                match op {
                    0 | 1 => {
                        let expected = model.insert(key.clone(), value);
                        proptest::prop_assert_eq!(map.put(key, value), expected);
                    }
                    2 => {
                        proptest::prop_assert_eq!(map.remove(&key), model.remove(&key));
                    }
                    _ => map.resize_table(usize::try_from(value).unwrap_or(0)),
                }
                proptest::prop_assert!(is_prime(map.capacity()));
                proptest::prop_assert_eq!(map.len(), model.len());
            }
            let mut entries = map.get_keys_and_values();
            entries.sort();
            let mut expected: Vec<(String, i32)> = model.into_iter().collect();
            expected.sort();
            proptest::prop_assert_eq!(entries, expected);
        }
    }
}
