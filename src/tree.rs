use crate::{
    iter::{Edges, IntoIter, Iter},
    node::{self, Link, Node},
};

/// An ordered set of unique keys, stored in a height-balanced (AVL) binary
/// search tree.
///
/// Inserting a key that is already present, or deleting a key that is not,
/// leaves the tree unchanged.
///
/// # Examples
///
/// ```
/// use avltree::AvlTree;
///
/// let mut t = AvlTree::new();
///
/// assert!(t.insert(10));
/// assert!(t.insert(20));
/// assert!(t.insert(30));
///
/// // Duplicate keys are ignored.
/// assert!(!t.insert(20));
///
/// // Inserting in ascending order rotates 20 to the root.
/// assert_eq!(t.root().map(|n| *n.key()), Some(20));
/// assert_eq!(t.in_order(), [&10, &20, &30]);
///
/// assert_eq!(t.delete(&20), Some(20));
/// assert!(t.search(&20).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<K>(Link<K>);

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> AvlTree<K> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node of the tree, or [`None`] if the tree is empty.
    ///
    /// The tree structure can be walked from the root using
    /// [`Node::left()`] and [`Node::right()`].
    pub fn root(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Remove all keys from the tree.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Iterate over the keys in the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// Collect all keys in the tree in ascending order.
    ///
    /// The traversal is recomputed in full on each call.
    pub fn in_order(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Iterate over the parent -> child links of the tree, in pre-order.
    ///
    /// ```
    /// use avltree::{AvlTree, Side};
    ///
    /// let t = [10, 20, 30].into_iter().collect::<AvlTree<_>>();
    ///
    /// let edges = t
    ///     .edges()
    ///     .map(|e| (*e.parent, *e.child, e.side))
    ///     .collect::<Vec<_>>();
    ///
    /// assert_eq!(edges, [(20, 10, Side::Left), (20, 30, Side::Right)]);
    /// ```
    pub fn edges(&self) -> Edges<'_, K> {
        Edges::new(self.root())
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    /// Insert `key` into the tree, rebalancing as necessary.
    ///
    /// Returns false (and leaves the tree unmodified) if `key` is already
    /// present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, inserted) = node::insert(self.0.take(), key);
        self.0 = Some(root);
        inserted
    }

    /// Remove `key` from the tree, rebalancing as necessary.
    ///
    /// Returns the removed key, or [`None`] (leaving the tree unmodified) if
    /// it was not present.
    pub fn delete(&mut self, key: &K) -> Option<K> {
        let (root, removed) = node::remove(self.0.take(), key);
        self.0 = root;
        removed
    }

    /// Find the [`Node`] holding `key`, if any.
    pub fn search(&self, key: &K) -> Option<&Node<K>> {
        self.root()?.search(key)
    }

    /// Returns true if `key` is present in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for AvlTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}
