//! The contract shared by both map implementations.

/// A map from owned string keys to values of type `V`.
///
/// [`OpenAddressingMap`](crate::OpenAddressingMap) and
/// [`ChainingMap`](crate::ChainingMap) implement this trait so that callers and
/// tests can treat them interchangeably. Both types also expose the same
/// operations as inherent methods.
pub trait StringMap<V> {
    /// Inserts or overwrites `key`, returning the previous value if there was one
    fn put(&mut self, key: String, value: V) -> Option<V>;

    /// Returns the value stored under `key`
    fn get(&self, key: &str) -> Option<&V>;

    /// Removes `key`, returning its value; absent keys are a no-op
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Drops every entry and keeps the current capacity
    fn clear(&mut self);

    /// Rebuilds the table with at least `new_capacity` buckets.
    ///
    /// Invalid targets leave the table unchanged.
    fn resize_table(&mut self, new_capacity: usize);

    /// Number of live entries
    fn len(&self) -> usize;

    /// Number of buckets
    fn capacity(&self) -> usize;

    /// Number of buckets holding no live entry
    fn empty_buckets(&self) -> usize;

    /// Live entries in bucket scan order
    fn entries(&self) -> Vec<(&str, &V)>;

    /// Returns true if `key` has a live entry
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if the map holds no live entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ratio of live entries to buckets
    #[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
    fn table_load(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Returns owned copies of every live `(key, value)` pair in bucket scan order
    fn get_keys_and_values(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.entries().into_iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }

    /// Returns the keys in bucket scan order
    fn keys(&self) -> Vec<String> {
        self.entries().into_iter().map(|(k, _)| k.to_owned()).collect()
    }

    /// Returns the values in bucket scan order
    fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries().into_iter().map(|(_, v)| v.clone()).collect()
    }
}
