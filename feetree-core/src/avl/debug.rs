use std::fmt::{Debug, Formatter};

use crate::avl::{node::Node, AvlTree};

impl<K, V> AvlTree<K, V>
where
    K: Debug,
{
    /// Writes the shape of the tree, one node per line with its cached height.
    #[inline]
    pub(crate) fn dump(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "┓")?;
        match self.root.as_deref() {
            Some(root) => Self::dump_node(root, "", String::new(), true, f),
            None => Ok(()),
        }
    }

    fn dump_node(
        node: &Node<K, V>,
        tag: &str,
        prefix: String,
        is_last: bool,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        let weld = if is_last { "┗" } else { "┣" };
        writeln!(f, "{}{}━ {}{:?} ({})", prefix, weld, tag, node.key, node.height)?;

        let children = [("L ", node.left.as_deref()), ("R ", node.right.as_deref())]
            .into_iter()
            .filter_map(|(tag, child)| child.map(|c| (tag, c)))
            .collect::<Vec<_>>();

        let next_prefix = prefix + if is_last { "   " } else { "┃  " };
        for (index, (tag, child)) in children.iter().enumerate() {
            let is_last = index == children.len() - 1;
            Self::dump_node(child, tag, next_prefix.clone(), is_last, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use crate::avl::AvlTree;

    struct Dump(AvlTree<i32, ()>);

    impl Debug for Dump {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            self.0.dump(f)
        }
    }

    #[test]
    fn test_dump() {
        let mut tree = AvlTree::new();
        assert_eq!(format!("{:?}", Dump(AvlTree::new())), "┓\n");

        for key in [2, 1, 3, 4] {
            _ = tree.insert(key, ());
        }
        let expected = "┓\n\
                        ┗━ 2 (3)\n   \
                           ┣━ L 1 (1)\n   \
                           ┗━ R 3 (2)\n      \
                              ┗━ R 4 (1)\n";
        assert_eq!(format!("{:?}", Dump(tree)), expected);
    }
}
