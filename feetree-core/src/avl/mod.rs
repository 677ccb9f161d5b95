pub use iter::{IntoIter, Iter};
pub use rotate::Rotations;
pub(crate) use validate::InvariantViolation;

mod crud;
mod debug;
mod iter;
mod node;
mod rotate;
mod validate;

use node::{height, Link};

/// Represents an AVL tree, all balancing algorithms in feetree will be implemented here.
///
/// Its structure consists of [`node`]s, each of which exclusively owns its left and right
/// subtrees. There are no parent pointers, so the tree is released recursively when dropped.
///
/// Different kinds of algorithms will be implemented in different `mod`s.
/// See [`crud`], [`rotate`], [`iter`], [`debug`], [`validate`] for more details.
pub(crate) struct AvlTree<K, V> {
    root: Link<K, V>,
    /// The number of distinct keys stored in the tree.
    len: usize,
    rotations: Rotations,
}

impl<K, V> AvlTree<K, V> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            root: None,
            len: 0,
            rotations: Rotations::default(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the root node, `0` for an empty tree.
    #[inline]
    pub(crate) fn height(&self) -> usize {
        height(&self.root)
    }

    #[inline]
    pub(crate) fn rotations(&self) -> Rotations {
        self.rotations
    }
}

impl<K, V> Default for AvlTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
