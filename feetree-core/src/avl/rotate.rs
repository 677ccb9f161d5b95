use std::cmp::Ordering;

use crate::avl::{node::Node, AvlTree};

/// The number of single rotations an index has performed since it was created.
///
/// A double rotation (left-right or right-left) counts as one rotation in each direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rotations {
    /// Rotations that promoted a right child.
    pub left: usize,
    /// Rotations that promoted a left child.
    pub right: usize,
}

impl Rotations {
    #[inline]
    pub fn total(&self) -> usize {
        self.left + self.right
    }
}

impl<K, V> AvlTree<K, V> {
    /// Restores the balance of `node` after an insertion into one of its subtrees.
    ///
    /// `inner` is the order of the inserted key relative to the key of the child the
    /// insertion descended into. When `node` is out of balance that child did not rotate
    /// (its subtree grew), so it is still the child on the heavy side.
    pub(super) fn rebalance(
        &mut self,
        mut node: Box<Node<K, V>>,
        inner: Ordering,
    ) -> Box<Node<K, V>> {
        node.update_height();
        let factor = node.balance_factor();

        if factor > 1 && inner == Ordering::Less {
            return self.rotate_right(node);
        }
        if factor < -1 && inner == Ordering::Greater {
            return self.rotate_left(node);
        }
        if factor > 1 && inner == Ordering::Greater {
            node.left = node.left.take().map(|left| self.rotate_left(left));
            return self.rotate_right(node);
        }
        if factor < -1 && inner == Ordering::Less {
            node.right = node.right.take().map(|right| self.rotate_right(right));
            return self.rotate_left(node);
        }
        node
    }

    /// Promotes the left child of `node` into its position.
    ///
    /// `node` becomes the right child of the promoted node, and the promoted node's former
    /// right subtree becomes the left subtree of `node`.
    pub(super) fn rotate_right(&mut self, mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let Some(mut pivot) = node.left.take() else {
            return node;
        };
        node.left = pivot.right.take();
        node.update_height();

        pivot.right = Some(node);
        pivot.update_height();

        self.rotations.right += 1;
        tracing::trace!(
            target: "feetree::avl",
            direction = "right",
            height = pivot.height,
            "rotated subtree"
        );
        pivot
    }

    /// Mirror of [`Self::rotate_right`].
    pub(super) fn rotate_left(&mut self, mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let Some(mut pivot) = node.right.take() else {
            return node;
        };
        node.right = pivot.left.take();
        node.update_height();

        pivot.left = Some(node);
        pivot.update_height();

        self.rotations.left += 1;
        tracing::trace!(
            target: "feetree::avl",
            direction = "left",
            height = pivot.height,
            "rotated subtree"
        );
        pivot
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::avl::{node::Node, AvlTree};

    fn chain_left() -> Box<Node<i32, ()>> {
        // 3 -> 2 -> 1, all on the left.
        let mut mid = Node::leaf(2, ());
        mid.left = Some(Node::leaf(1, ()));
        mid.update_height();
        let mut top = Node::leaf(3, ());
        top.left = Some(mid);
        top.update_height();
        top
    }

    #[test]
    fn test_rotate_right() {
        let mut tree = AvlTree::<i32, ()>::new();
        let root = tree.rotate_right(chain_left());

        assert_eq!(root.key, 2);
        assert_eq!(root.height, 2);
        assert_eq!(root.left.as_ref().map(|n| n.key), Some(1));
        assert_eq!(root.right.as_ref().map(|n| n.key), Some(3));
        assert_eq!(root.right.as_ref().map(|n| n.height), Some(1));
        assert_eq!(tree.rotations().right, 1);
        assert_eq!(tree.rotations().left, 0);
    }

    #[test]
    fn test_rotate_left_moves_inner_subtree() {
        // 1 with right child 3, which has children 2 and 4.
        let mut right = Node::leaf(3, ());
        right.left = Some(Node::leaf(2, ()));
        right.right = Some(Node::leaf(4, ()));
        right.update_height();
        let mut root = Node::leaf(1, ());
        root.right = Some(right);
        root.update_height();

        let mut tree = AvlTree::<i32, ()>::new();
        let root = tree.rotate_left(root);

        assert_eq!(root.key, 3);
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.key, 1);
        assert_eq!(left.right.as_ref().map(|n| n.key), Some(2));
        assert_eq!(left.height, 2);
        assert_eq!(root.height, 3);
        assert_eq!(tree.rotations().left, 1);
    }

    #[test]
    fn test_rotate_without_child_is_noop() {
        let mut tree = AvlTree::<i32, ()>::new();
        let root = tree.rotate_left(Node::leaf(1, ()));
        assert_eq!(root.key, 1);
        assert_eq!(tree.rotations().total(), 0);
    }

    #[test]
    fn test_rebalance_left_right() {
        // 3 with left child 1, which has right child 2.
        let mut left = Node::leaf(1, ());
        left.right = Some(Node::leaf(2, ()));
        left.update_height();
        let mut root = Node::leaf(3, ());
        root.left = Some(left);

        let mut tree = AvlTree::<i32, ()>::new();
        let root = tree.rebalance(root, Ordering::Greater);

        assert_eq!(root.key, 2);
        assert_eq!(root.left.as_ref().map(|n| n.key), Some(1));
        assert_eq!(root.right.as_ref().map(|n| n.key), Some(3));
        assert_eq!(tree.rotations().left, 1);
        assert_eq!(tree.rotations().right, 1);
    }

    #[test]
    fn test_rebalance_balanced_is_noop() {
        let mut tree = AvlTree::<i32, ()>::new();
        let mut root = Node::leaf(2, ());
        root.left = Some(Node::leaf(1, ()));
        let root = tree.rebalance(root, Ordering::Equal);

        assert_eq!(root.key, 2);
        assert_eq!(root.height, 2);
        assert_eq!(tree.rotations().total(), 0);
    }
}
