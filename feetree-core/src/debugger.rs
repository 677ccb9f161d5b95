use std::fmt::{Debug, Formatter};

use crate::{
    avl::{AvlTree, Rotations},
    Result,
};

/// Read-only introspection of an index's tree structure.
pub struct Debugger<'a, K, V> {
    tree: &'a AvlTree<K, V>,
}

impl<'a, K, V> Debugger<'a, K, V> {
    #[inline]
    pub(crate) fn new(tree: &'a AvlTree<K, V>) -> Self {
        Self { tree }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Rotations performed since the index was created.
    #[inline]
    pub fn rotations(&self) -> Rotations {
        self.tree.rotations()
    }
}

impl<K, V> Debugger<'_, K, V>
where
    K: Ord,
{
    /// Walks the whole tree and checks ordering, cached heights and balance of every node.
    #[inline]
    pub fn validate(&self) -> Result<()> {
        self.tree.validate().map_err(Into::into)
    }
}

impl<K, V> Debug for Debugger<'_, K, V>
where
    K: Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.tree.dump(f)
    }
}
