use std::{borrow::Borrow, cmp::Ordering};

use crate::avl::{
    node::{Link, Node},
    AvlTree,
};

/// Where an insertion ended up, reported by each level of the recursive descent.
enum Placement<K, V> {
    /// The pair was placed. Carries the order of the inserted key relative to the key of
    /// the subtree root that was descended into, `Equal` if the pair became that root.
    Placed(Ordering),
    /// The key is already present, the pair is handed back untouched.
    Rejected(K, V),
}

impl<K, V> AvlTree<K, V>
where
    K: Ord,
{
    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            match key.cmp(current.key.borrow()) {
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => node = current.right.as_deref(),
                Ordering::Equal => return Some(&current.value),
            }
        }
        None
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref_mut();
        while let Some(current) = node {
            match key.cmp(current.key.borrow()) {
                Ordering::Less => node = current.left.as_deref_mut(),
                Ordering::Greater => node = current.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut current.value),
            }
        }
        None
    }

    /// Inserts a key-value pair, keeping the tree balanced.
    ///
    /// If the key is already present the tree is left unchanged and the pair is returned.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        let root = self.root.take();
        let (root, placement) = self.insert_inner(root, key, value);
        self.root = Some(root);

        match placement {
            Placement::Placed(_) => {
                self.len += 1;
                Ok(())
            }
            Placement::Rejected(key, value) => Err((key, value)),
        }
    }

    /// Inserts into the subtree behind `link` and returns the new root of that subtree,
    /// which must be stored back into the slot it was taken from.
    fn insert_inner(
        &mut self,
        link: Link<K, V>,
        key: K,
        value: V,
    ) -> (Box<Node<K, V>>, Placement<K, V>) {
        let Some(mut node) = link else {
            return (Node::leaf(key, value), Placement::Placed(Ordering::Equal));
        };

        let order = key.cmp(&node.key);
        let placement = match order {
            Ordering::Less => {
                let (left, placement) = self.insert_inner(node.left.take(), key, value);
                node.left = Some(left);
                placement
            }
            Ordering::Greater => {
                let (right, placement) = self.insert_inner(node.right.take(), key, value);
                node.right = Some(right);
                placement
            }
            Ordering::Equal => return (node, Placement::Rejected(key, value)),
        };

        match placement {
            Placement::Placed(inner) => (self.rebalance(node, inner), Placement::Placed(order)),
            // Nothing below changed, heights are still valid.
            rejected @ Placement::Rejected(..) => (node, rejected),
        }
    }

    /// The entry with the smallest key.
    pub(crate) fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// The entry with the largest key.
    pub(crate) fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use crate::avl::AvlTree;

    fn root_key(tree: &AvlTree<i32, &'static str>) -> Option<i32> {
        tree.root.as_ref().map(|n| n.key)
    }

    #[test]
    fn test_insert_and_get() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(5, "five").is_ok());
        assert!(tree.insert(3, "three").is_ok());
        assert!(tree.insert(8, "eight").is_ok());

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(&5), Some(&"five"));
        assert_eq!(tree.get(&3), Some(&"three"));
        assert_eq!(tree.get(&8), Some(&"eight"));
        assert_eq!(tree.get(&4), None);
        assert!(tree.contains(&8));
        assert!(!tree.contains(&9));
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(1, "first").is_ok());
        assert_eq!(tree.insert(1, "second"), Err((1, "second")));
        assert_eq!(tree.get(&1), Some(&"first"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_get_mut() {
        let mut tree = AvlTree::new();
        for key in [4, 2, 6, 1] {
            _ = tree.insert(key, "old");
        }
        if let Some(value) = tree.get_mut(&1) {
            *value = "new";
        }
        assert_eq!(tree.get(&1), Some(&"new"));
        assert_eq!(tree.get(&2), Some(&"old"));
        assert!(tree.get_mut(&3).is_none());
    }

    #[test]
    fn test_single_rotations() {
        let mut tree = AvlTree::new();
        for key in [3, 2, 1] {
            _ = tree.insert(key, "");
        }
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(tree.rotations().right, 1);
        assert_eq!(tree.rotations().left, 0);

        let mut tree = AvlTree::new();
        for key in [1, 2, 3] {
            _ = tree.insert(key, "");
        }
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(tree.rotations().left, 1);
        assert_eq!(tree.rotations().right, 0);
    }

    #[test]
    fn test_double_rotations() {
        let mut tree = AvlTree::new();
        for key in [3, 1, 2] {
            _ = tree.insert(key, "");
        }
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(tree.height(), 2);
        assert_eq!((tree.rotations().left, tree.rotations().right), (1, 1));

        let mut tree = AvlTree::new();
        for key in [1, 3, 2] {
            _ = tree.insert(key, "");
        }
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(tree.height(), 2);
        assert_eq!((tree.rotations().left, tree.rotations().right), (1, 1));
    }

    #[test]
    fn test_first_last() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);

        for key in [50, 20, 80, 10, 90, 30] {
            _ = tree.insert(key, "");
        }
        assert_eq!(tree.first().map(|(k, _)| *k), Some(10));
        assert_eq!(tree.last().map(|(k, _)| *k), Some(90));
    }
}
