use thiserror::Error;

use crate::avl::{node::Node, AvlTree};

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum InvariantViolation {
    #[error("keys are not strictly ascending at in-order position {position}")]
    OutOfOrder { position: usize },
    #[error("the cached height {cached} differs from the computed height {computed}")]
    HeightMismatch { cached: usize, computed: usize },
    #[error("the balance factor {factor} is outside of [-1, 1]")]
    Unbalanced { factor: isize },
    #[error("{counted} entries are reachable but the index records {recorded}")]
    LengthMismatch { counted: usize, recorded: usize },
}

impl<K, V> AvlTree<K, V>
where
    K: Ord,
{
    /// Checks ordering, cached heights, balance factors and the recorded length.
    pub(crate) fn validate(&self) -> Result<(), InvariantViolation> {
        if let Some(root) = self.root.as_deref() {
            Self::validate_node(root)?;
        }

        let mut counted = 0;
        let mut prev: Option<&K> = None;
        for (position, (key, _)) in self.iter().enumerate() {
            if prev.is_some_and(|prev| prev >= key) {
                return Err(InvariantViolation::OutOfOrder { position });
            }
            prev = Some(key);
            counted += 1;
        }

        if counted != self.len {
            return Err(InvariantViolation::LengthMismatch {
                counted,
                recorded: self.len,
            });
        }
        Ok(())
    }

    /// Returns the computed height of the subtree rooted at `node`.
    fn validate_node(node: &Node<K, V>) -> Result<usize, InvariantViolation> {
        let left = node.left.as_deref().map(Self::validate_node).transpose()?;
        let right = node.right.as_deref().map(Self::validate_node).transpose()?;
        let (left, right) = (left.unwrap_or(0), right.unwrap_or(0));

        let computed = 1 + left.max(right);
        if node.height != computed {
            return Err(InvariantViolation::HeightMismatch {
                cached: node.height,
                computed,
            });
        }

        let factor = left as isize - right as isize;
        if !(-1..=1).contains(&factor) {
            return Err(InvariantViolation::Unbalanced { factor });
        }
        Ok(computed)
    }
}

#[cfg(test)]
mod tests {
    use super::InvariantViolation;
    use crate::avl::{node::Node, AvlTree};

    #[test]
    fn test_valid_tree() {
        let mut tree = AvlTree::<i32, ()>::new();
        assert_eq!(tree.validate(), Ok(()));
        for key in 0..64 {
            _ = tree.insert(key, ());
            assert_eq!(tree.validate(), Ok(()));
        }
    }

    #[test]
    fn test_detect_height_mismatch() {
        let mut tree = AvlTree::new();
        _ = tree.insert(1, ());
        if let Some(root) = tree.root.as_mut() {
            root.height = 5;
        }
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::HeightMismatch {
                cached: 5,
                computed: 1
            })
        );
    }

    #[test]
    fn test_detect_unbalanced() {
        let mut tree = AvlTree::new();
        let mut mid = Node::leaf(2, ());
        mid.left = Some(Node::leaf(1, ()));
        mid.update_height();
        let mut top = Node::leaf(3, ());
        top.left = Some(mid);
        top.update_height();
        tree.root = Some(top);
        tree.len = 3;

        assert_eq!(tree.validate(), Err(InvariantViolation::Unbalanced { factor: 2 }));
    }

    #[test]
    fn test_detect_out_of_order() {
        let mut tree = AvlTree::new();
        let mut root = Node::leaf(1, ());
        root.left = Some(Node::leaf(2, ()));
        root.update_height();
        tree.root = Some(root);
        tree.len = 2;

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::OutOfOrder { position: 1 })
        );
    }

    #[test]
    fn test_detect_length_mismatch() {
        let mut tree = AvlTree::new();
        _ = tree.insert(1, ());
        tree.len = 2;

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::LengthMismatch {
                counted: 1,
                recorded: 2
            })
        );
    }
}
