use std::iter::FusedIterator;

use crate::avl::{
    node::{Link, Node},
    AvlTree,
};

/// An in-order iterator over the entries of an index, in ascending key order.
///
/// The iterator is lazy, it only keeps the path from the current entry up to the
/// nearest ancestor that is still to be visited.
pub struct Iter<'a, K, V> {
    track: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            track: Vec::new(),
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    /// Pushes `node` and all of its left descendants.
    #[inline]
    fn descend(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.track.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.track.pop()?;
        self.descend(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            track: self.track.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning in-order iterator, consumes the index.
pub struct IntoIter<K, V> {
    track: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    fn new(root: Link<K, V>, len: usize) -> Self {
        let mut iter = Self {
            track: Vec::new(),
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    /// Detaches the left spine of `link` onto the track.
    #[inline]
    fn descend(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.track.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.track.pop()?;
        let Node {
            key, value, right, ..
        } = *node;
        self.descend(right);
        self.remaining -= 1;
        Some((key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> AvlTree<K, V> {
    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    #[inline]
    pub(crate) fn into_entries(self) -> IntoIter<K, V> {
        IntoIter::new(self.root, self.len)
    }
}

#[cfg(test)]
mod tests {
    use crate::avl::AvlTree;

    fn tree_of(keys: &[i32]) -> AvlTree<i32, i32> {
        let mut tree = AvlTree::new();
        for &key in keys {
            _ = tree.insert(key, key * 10);
        }
        tree
    }

    #[test]
    fn test_iter_ascending() {
        let tree = tree_of(&[5, 1, 9, 3, 7, 2, 8]);
        let keys = tree.iter().map(|(k, _)| *k).collect::<Vec<_>>();
        assert_eq!(keys, vec![1, 2, 3, 5, 7, 8, 9]);

        let values = tree.iter().map(|(_, v)| *v).collect::<Vec<_>>();
        assert_eq!(values, vec![10, 20, 30, 50, 70, 80, 90]);
    }

    #[test]
    fn test_iter_is_lazy_and_sized() {
        let tree = tree_of(&[4, 2, 6]);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().map(|(k, _)| *k), Some(2));
        assert_eq!(iter.len(), 2);

        // Cloning keeps the position, restarting requires a fresh iterator.
        let rest = iter.clone().map(|(k, _)| *k).collect::<Vec<_>>();
        assert_eq!(rest, vec![4, 6]);
        assert_eq!(iter.count(), 2);
        assert_eq!(tree.iter().count(), 3);
    }

    #[test]
    fn test_iter_empty() {
        let tree = tree_of(&[]);
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.into_entries().next(), None);
    }

    #[test]
    fn test_into_iter() {
        let tree = tree_of(&[10, 30, 20, 40, 5]);
        let pairs = tree.into_entries().collect::<Vec<_>>();
        assert_eq!(pairs, vec![(5, 50), (10, 100), (20, 200), (30, 300), (40, 400)]);
    }
}
