use std::cmp::Ordering;

/// An owned, possibly absent subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single node of an [`AvlTree`](crate::AvlTree).
///
/// Each node exclusively owns its left and right subtrees. Nodes are exposed
/// read-only so callers can walk (and render) the tree structure.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Child nodes pointers.
    left: Link<K>,
    right: Link<K>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an absent subtree has a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of far more entries than can be addressed.
    height: u8,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<K> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<K> {
        self.right.take()
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    /// Descend from this node to the node holding `key`, if any.
    pub(crate) fn search(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left()?.search(key),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right()?.search(key),
        }
    }
}

/// Insert `key` into the subtree rooted at `node`, returning the (possibly
/// new) subtree root and whether the key was added.
///
/// The caller must link the returned root in place of `node`. If `key` is
/// already present the subtree is returned unmodified.
pub(crate) fn insert<K>(node: Link<K>, key: K) -> (Box<Node<K>>, bool)
where
    K: Ord,
{
    let mut node = match node {
        Some(v) => v,
        None => return (Box::new(Node::new(key)), true),
    };

    // Descend, recording how the key orders against the child it is inserted
    // beneath. The key is moved into the subtree, so this comparison is taken
    // on the way down.
    //
    // If that child is rotated during the recursive insert its height is left
    // unchanged, and this node cannot become unbalanced - the recorded
    // ordering is only consulted when the child is still the same node.
    let (inserted, child_ord) = match key.cmp(&node.key) {
        Ordering::Less => {
            let child_ord = node.left().map(|v| key.cmp(&v.key));
            let (left, inserted) = insert(node.left.take(), key);
            node.left = Some(left);
            (inserted, child_ord)
        }
        Ordering::Greater => {
            let child_ord = node.right().map(|v| key.cmp(&v.key));
            let (right, inserted) = insert(node.right.take(), key);
            node.right = Some(right);
            (inserted, child_ord)
        }
        Ordering::Equal => return (node, false),
    };

    if !inserted {
        // The tree structure has not been modified, so it does not require
        // rebalancing.
        return (node, false);
    }

    update_height(&mut node);

    // Determine the balance factor of the subtree rooted at node and correct
    // it if the absolute difference in height between branches is > 1.
    //
    // A left-heavy imbalance can only follow an insert into the left subtree
    // (and vice versa), so the recorded ordering always refers to the heavy
    // child.
    let node = match (balance(&node), child_ord) {
        // Left-Left
        (2, Some(Ordering::Less)) => rotate_right(node),
        // Right-Right
        (-2, Some(Ordering::Greater)) => rotate_left(node),
        // Left-Right
        (2, Some(Ordering::Greater)) => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        // Right-Left
        (-2, Some(Ordering::Less)) => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
        (-1..=1, _) => node,
        _ => unreachable!(),
    };

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(&node).abs() <= 1);

    (node, true)
}

/// Remove `key` from the subtree rooted at `node`, returning the (possibly
/// new or absent) subtree root and the removed key.
///
/// Returns the subtree unmodified and [`None`] if the key is not found.
pub(crate) fn remove<K>(node: Link<K>, key: &K) -> (Link<K>, Option<K>)
where
    K: Ord,
{
    let mut node = match node {
        Some(v) => v,
        None => return (None, None),
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            removed
        }
        // This node holds the key to be removed.
        //
        // With at most one child, that child (if any) replaces this node and
        // there is nothing left to rebalance at this level.
        //
        // With two children, the in-order successor (the minimum of the right
        // subtree) is unlinked and its key takes the place of the removed key.
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return (right, Some(node.into_key())),
            (left, None) => return (left, Some(node.into_key())),
            (Some(left), Some(right)) => {
                let (right, successor) = remove_min(right);
                node.left = Some(left);
                node.right = right;
                Some(std::mem::replace(&mut node.key, successor))
            }
        },
    };

    if removed.is_none() {
        return (Some(node), None);
    }

    (Some(rebalance_after_remove(node)), removed)
}

/// Unlink the node holding the minimum key of the subtree rooted at `node`,
/// returning the remaining subtree and the extracted key.
///
/// Every node on the left edge is rebalanced on the way back up.
fn remove_min<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(rebalance_after_remove(node)), min)
        }
        None => {
            // The end of the left edge. Its right subtree (if any) is linked
            // in its place.
            let right = node.right.take();
            (right, node.into_key())
        }
    }
}

/// Recompute the height of `v` and restore its balance after a removal.
///
/// Unlike insertion, the rotation case is chosen by the balance factor of the
/// heavy child - the removed key is no longer present to compare against.
fn rebalance_after_remove<K>(mut v: Box<Node<K>>) -> Box<Node<K>> {
    update_height(&mut v);

    let v = match balance(&v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => rotate_right(v),
        (2..) => {
            v.left = v.left.take().map(rotate_left);
            rotate_right(v)
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => rotate_left(v),
        (..=-2) => {
            v.right = v.right.take().map(rotate_right);
            rotate_left(v)
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => v,
    };

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(&v).abs() <= 1);

    v
}

pub(crate) fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let mut p = x.right.take().unwrap();

    x.right = p.left.take();
    update_height(&mut x);

    // x is now a child of p, so its height is fixed first.
    p.left = Some(x);
    update_height(&mut p);

    p
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let mut p = y.left.take().unwrap();

    y.left = p.right.take();
    update_height(&mut y);

    p.right = Some(y);
    update_height(&mut p);

    p
}
