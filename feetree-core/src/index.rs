use std::{
    borrow::Borrow,
    fmt::{Debug, Formatter},
};

use crate::{
    avl::{AvlTree, IntoIter, Iter},
    debugger::Debugger,
};

/// An ordered key-value index backed by an AVL tree.
///
/// Keys are unique. Inserting a key that is already present leaves the existing entry
/// untouched, the first inserted value wins. Entries are never removed, the whole index
/// is released when it is dropped.
///
/// Every insertion keeps `|height(left) - height(right)| <= 1` for all nodes, so lookups
/// and insertions are `O(log n)`. In-order traversal yields keys in strictly ascending order.
pub struct OrderedIndex<K, V> {
    tree: AvlTree<K, V>,
}

impl<K, V> OrderedIndex<K, V> {
    /// Creates an empty index.
    #[inline]
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// The number of distinct keys in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The height of the underlying tree, `0` when empty.
    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Iterates over the entries in ascending key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Get a debugger for the index.
    #[inline]
    pub fn debugger(&self) -> Debugger<'_, K, V> {
        Debugger::new(&self.tree)
    }
}

impl<K, V> OrderedIndex<K, V>
where
    K: Ord,
{
    /// Inserts a key-value pair into the index.
    ///
    /// Returns `false` and drops the given pair if the key is already present.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(key, value).is_ok()
    }

    /// Inserts a key-value pair into the index, handing the pair back if the key is
    /// already present.
    #[inline]
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        self.tree.insert(key, value)
    }

    /// Check if the index contains a given key.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Get the value associated with a given key.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key)
    }

    /// Get a mutable reference to the value associated with a given key.
    ///
    /// Keys can not be changed once inserted, only their values.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_mut(key)
    }

    /// The entry with the smallest key.
    #[inline]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first()
    }

    /// The entry with the largest key.
    #[inline]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last()
    }
}

impl<K, V> Default for OrderedIndex<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for OrderedIndex<K, V>
where
    K: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.tree.dump(f)
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedIndex<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedIndex<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_entries()
    }
}

impl<K, V> Extend<(K, V)> for OrderedIndex<K, V>
where
    K: Ord,
{
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedIndex<K, V>
where
    K: Ord,
{
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
