/// An owning link to a subtree, `None` for an empty subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
    /// Cached height of the subtree rooted at this node, a leaf has height 1.
    pub(super) height: usize,
}

impl<K, V> Node<K, V> {
    #[inline]
    pub(super) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Recomputes the cached height from the children's cached heights.
    #[inline]
    pub(super) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub(super) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

#[inline]
pub(super) fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}
