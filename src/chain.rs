//! Singly linked list holding the entries of one chaining bucket.

use std::{fmt, iter::FusedIterator, mem};

/// Link to the next node
type Link<V> = Option<Box<Node<V>>>;

/// A key-value pair and the link to the rest of the chain
struct Node<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
    /// Following node, if any
    next: Link<V>,
}

/// Entries that hash to the same bucket, in insertion order
pub(crate) struct Chain<V> {
    /// First node of the list
    head: Link<V>,
    /// Number of nodes
    length: usize,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self { head: None, length: 0 }
    }
}

impl<V> Chain<V> {
    /// Returns the value stored under `key`
    pub(crate) fn find(&self, key: &str) -> Option<&V> {
        self.iter().find(|&(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored under `key`
    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Appends a node at the tail without checking for an existing key
    pub(crate) fn push_back(&mut self, key: String, value: V) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { key, value, next: None }));
        self.length = self.length.saturating_add(1);
    }

    /// Unlinks the node holding `key` and returns its value
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.length = self.length.saturating_sub(1);
        Some(removed.value)
    }

    /// Number of nodes in the chain
    pub(crate) fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the chain has no nodes
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates the chain from head to tail
    pub(crate) fn iter(&self) -> ChainIter<'_, V> {
        ChainIter { next: self.head.as_deref() }
    }

    /// Detaches every node, yielding owned pairs from head to tail
    pub(crate) fn drain(&mut self) -> Drain<V> {
        self.length = 0;
        Drain { next: self.head.take() }
    }
}

/// Copies node by node through a tail cursor so long chains do not recurse
impl<V: Clone> Clone for Chain<V> {
    fn clone(&self) -> Self {
        let mut chain = Self::default();
        let mut tail = &mut chain.head;
        for (key, value) in self.iter() {
            let node = Node { key: key.to_owned(), value: value.clone(), next: None };
            tail = &mut tail.insert(Box::new(node)).next;
        }
        chain.length = self.length;
        chain
    }
}

impl<V> Drop for Chain<V> {
    /// Unlinks iteratively so long chains do not recurse through `Box` drops
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Renders as `SLL [key: value -> key: value]`
impl<V: fmt::Display> fmt::Display for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SLL [")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("]")
    }
}

impl<V> fmt::Debug for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain").field("length", &self.length).finish_non_exhaustive()
    }
}

/// Borrowing iterator over a [`Chain`]
pub(crate) struct ChainIter<'a, V> {
    /// Node to yield next
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some((node.key.as_str(), &node.value))
    }
}

impl<V> FusedIterator for ChainIter<'_, V> {}

impl<V> fmt::Debug for ChainIter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainIter").field("next_key", &self.next.map(|node| &node.key)).finish()
    }
}

/// Owning iterator returned by [`Chain::drain`]
pub(crate) struct Drain<V> {
    /// Detached remainder of the chain
    next: Link<V>,
}

impl<V> Iterator for Drain<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.next.take()?;
        let Node { key, value, next } = node;
        self.next = next;
        Some((key, value))
    }
}

impl<V> fmt::Debug for Drain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drain").field("exhausted", &self.next.is_none()).finish_non_exhaustive()
    }
}

impl<V> Drop for Drain<V> {
    fn drop(&mut self) {
        let mut link = mem::take(&mut self.next);
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}
