use crate::node::Node;

/// The side of a parent node a child is linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The child holds a lesser key than the parent.
    Left,
    /// The child holds a greater key than the parent.
    Right,
}

/// A parent -> child link in an [`AvlTree`](crate::AvlTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a, K> {
    /// The key of the parent node.
    pub parent: &'a K,
    /// The key of the child node.
    pub child: &'a K,
    /// Which child of `parent` the `child` node is.
    pub side: Side,
}

/// A pre-order iterator over the [`Edge`]s of an [`AvlTree`](crate::AvlTree).
///
/// The left edge of a node is always yielded before its right edge, and
/// before any edge of the right subtree.
///
/// Created by [`AvlTree::edges()`](crate::AvlTree::edges).
#[derive(Debug)]
pub struct Edges<'a, K> {
    stack: Vec<(&'a Node<K>, &'a Node<K>, Side)>,
}

impl<'a, K> Edges<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut this = Self { stack: vec![] };

        if let Some(root) = root {
            this.push_children(root);
        }

        this
    }

    fn push_children(&mut self, parent: &'a Node<K>) {
        // The stack is LIFO: push the right edge first so the left edge is
        // visited first.
        if let Some(right) = parent.right() {
            self.stack.push((parent, right, Side::Right));
        }
        if let Some(left) = parent.left() {
            self.stack.push((parent, left, Side::Left));
        }
    }
}

impl<'a, K> Iterator for Edges<'a, K> {
    type Item = Edge<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (parent, child, side) = self.stack.pop()?;

        self.push_children(child);

        Some(Edge {
            parent: parent.key(),
            child: child.key(),
            side,
        })
    }
}
