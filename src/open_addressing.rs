use std::{fmt, iter::FusedIterator, mem};

use crate::{
    ResizeError, StringMap,
    hash::{HashFunction, hash_function_1},
    prime::{next_prime, prime_at_least},
};

/// Load factor at which `put` doubles the table before inserting
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// Requested capacity used by `Default` and `FromIterator`
const DEFAULT_CAPACITY: usize = 11;

/// A live key-value pair
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// State of a single slot in the table
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never used since the last rebuild; ends every probe sequence
    Empty,
    /// Previously held an entry; lookups probe past it, inserts may reuse it
    Tombstone,
    /// Holds a live entry
    Occupied(Entry<V>),
}

/// A string-keyed hash table using open addressing with quadratic probing.
///
/// Collisions are resolved by probing `h0`, `h0 + 1`, `h0 + 4`, `h0 + 9`, ...
/// modulo the capacity, which is always prime. Removal leaves a tombstone so
/// that probe sequences running through the slot stay intact; tombstones are
/// only cleared when the table is rebuilt.
///
/// The table doubles (rounded up to a prime) before any insert that finds the
/// load factor at or above [`MAX_LOAD_FACTOR`], which keeps at least one free
/// slot reachable from every home position.
///
/// ```rust
/// use strmap::{OpenAddressingMap, hash_function_1};
///
/// let mut map = OpenAddressingMap::new(20, hash_function_1);
/// assert_eq!(map.capacity(), 23);
///
/// map.put("key1", 10);
/// assert_eq!(map.get("key1"), Some(&10));
///
/// map.remove("key1");
/// assert!(!map.contains_key("key1"));
/// ```
#[derive(Clone)]
pub struct OpenAddressingMap<V> {
    /// The slots; the vector length is the capacity
    buckets: Vec<Slot<V>>,
    /// Number of live entries, tombstones excluded
    size: usize,
    /// Caller-supplied hash function
    hash_function: HashFunction,
}

/// Slot indices visited for one key
#[derive(Debug)]
struct ProbeSequence {
    /// `hash(key) % capacity`
    home: usize,
    /// `j * j % capacity` for the next probe
    offset: usize,
    /// `(2 * j + 1) % capacity`, the distance from `j * j` to `(j + 1) * (j + 1)`
    step: usize,
    /// Number of buckets
    capacity: usize,
    /// Probes left before giving up
    remaining: usize,
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let index = (self.home + self.offset) % self.capacity;
        self.offset = (self.offset + self.step) % self.capacity;
        self.step = (self.step + 2) % self.capacity;

        Some(index)
    }
}

/// Builds a slot vector of `capacity` empty slots
fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

impl<V> Default for OpenAddressingMap<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, hash_function_1)
    }
}

impl<V> Extend<(String, V)> for OpenAddressingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(String, V)> for OpenAddressingMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<V> OpenAddressingMap<V> {
    /// Creates an empty map with `next_prime(capacity)` slots
    #[must_use]
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self { buckets: empty_slots(next_prime(capacity)), size: 0, hash_function }
    }

    /// Walks the probe sequence of `key` for the current capacity
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn probe(&self, key: &str) -> ProbeSequence {
        let capacity = self.buckets.len();
        let home = ((self.hash_function)(key) % capacity as u64) as usize;
        ProbeSequence { home, offset: 0, step: 1, capacity, remaining: capacity }
    }

    /// Finds the slot holding the live entry for `key`
    fn find_key(&self, key: &str) -> Option<usize> {
        for index in self.probe(key) {
            match self.buckets.get(index)? {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.key == key => return Some(index),
                Slot::Tombstone | Slot::Occupied(_) => {}
            }
        }
        None
    }

    /// Finds the first empty or tombstoned slot on the probe sequence of `key`
    fn find_vacant(&self, key: &str) -> Option<usize> {
        self.probe(key)
            .find(|&index| matches!(self.buckets.get(index), Some(Slot::Empty | Slot::Tombstone)))
    }

    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// Returns the previous value if the key was already present.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        if self.table_load() >= MAX_LOAD_FACTOR {
            self.resize_table(self.capacity().saturating_mul(2));
        }

        let key = key.into();
        if let Some(entry) = self.find_key(&key).and_then(|index| self.entry_mut(index)) {
            return Some(mem::replace(&mut entry.value, value));
        }

        // The load bound guarantees a vacancy among the reachable slots
        let vacant = self.find_vacant(&key);
        debug_assert!(vacant.is_some(), "no vacant slot on the probe sequence of {key:?}");
        let slot = vacant.and_then(|index| self.buckets.get_mut(index))?;
        *slot = Slot::Occupied(Entry { key, value });
        self.size = self.size.saturating_add(1);
        None
    }

    /// Mutable access to the live entry at `index`
    fn entry_mut(&mut self, index: usize) -> Option<&mut Entry<V>> {
        match self.buckets.get_mut(index) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Retrieve a value for a given key
    pub fn get(&self, key: &str) -> Option<&V> {
        match self.buckets.get(self.find_key(key)?) {
            Some(Slot::Occupied(entry)) => Some(&entry.value),
            _ => None,
        }
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find_key(key)?;
        self.entry_mut(index).map(|entry| &mut entry.value)
    }

    /// Returns true if `key` has a live entry
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_key(key).is_some()
    }

    /// Tombstones the slot holding `key` and returns its value.
    ///
    /// Removing an absent key does nothing.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.find_key(key)?;
        let slot = self.buckets.get_mut(index)?;
        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied(entry) => {
                self.size = self.size.saturating_sub(1);
                Some(entry.value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Empties every slot, tombstones included, keeping the capacity
    pub fn clear(&mut self) {
        self.buckets = empty_slots(self.buckets.len());
        self.size = 0;
    }

    /// Rebuilds the table with at least `new_capacity` slots.
    ///
    /// Does nothing when `new_capacity` is below the number of live entries.
    /// See [`try_resize_table`](Self::try_resize_table).
    pub fn resize_table(&mut self, new_capacity: usize) {
        let _ = self.try_resize_table(new_capacity);
    }

    /// Rebuilds the table with `new_capacity` slots, rounded up to a prime.
    ///
    /// Live entries are re-inserted in slot order with [`put`](Self::put), so a
    /// target that leaves the load at or above [`MAX_LOAD_FACTOR`] grows further
    /// while rebuilding. Tombstones are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::BelowSize`] and leaves the table untouched if
    /// `new_capacity` is smaller than [`len`](Self::len).
    pub fn try_resize_table(&mut self, new_capacity: usize) -> Result<(), ResizeError> {
        if new_capacity < self.size {
            return Err(ResizeError::BelowSize { requested: new_capacity, size: self.size });
        }

        let old = mem::replace(&mut self.buckets, empty_slots(prime_at_least(new_capacity)));
        self.size = 0;

        for slot in old {
            if let Slot::Occupied(Entry { key, value }) = slot {
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

    /// Number of slots without a live entry; tombstones count as empty
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.len().saturating_sub(self.size)
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if there are no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots, always prime
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns an iterator over live entries in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, index: 0 }
    }
}

impl<V: Clone> OpenAddressingMap<V> {
    /// Copies every live `(key, value)` pair out in slot order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)> {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }
}

impl<V> StringMap<V> for OpenAddressingMap<V> {
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

    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }
}

impl<V> fmt::Debug for OpenAddressingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAddressingMap")
            .field("size", &self.size)
            .field("capacity", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

/// One line per slot: `None`, `TS` for a tombstone, or `K: key V: value`
impl<V: fmt::Display> fmt::Display for OpenAddressingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.buckets.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{index}: None")?,
                Slot::Tombstone => writeln!(f, "{index}: TS")?,
                Slot::Occupied(entry) => {
                    writeln!(f, "{index}: K: {} V: {}", entry.key, entry.value)?;
                }
            }
        }
        Ok(())
    }
}

/// Iterator over the live entries of an [`OpenAddressingMap`]
#[derive(Debug)]
pub struct Iter<'a, V> {
    /// Slots of the map being iterated
    buckets: &'a [Slot<V>],
    /// Next slot to inspect
    index: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.buckets.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Slot::Occupied(entry) = slot {
                return Some((entry.key.as_str(), &entry.value));
            }
        }
        None
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

#[allow(single_use_lifetimes)]
impl<'a, V> IntoIterator for &'a OpenAddressingMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
