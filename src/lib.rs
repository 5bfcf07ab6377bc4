//! An ordered set of unique keys backed by an AVL tree.
//!
//! An AVL tree is a self-balancing binary search tree. For every node, the
//! heights of the left and right subtrees differ by at most 1 (the "balance
//! factor"), which bounds the height of a tree holding `N` keys to
//! `O(lg N)`. After every insert or delete the tree restores this invariant
//! on the path back to the root by applying at most one single or double
//! rotation per node.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = [10, 20, 30, 25, 28, 27]
//!     .into_iter()
//!     .collect::<AvlTree<_>>();
//!
//! assert_eq!(t.in_order(), [&10, &20, &25, &27, &28, &30]);
//! assert!(t.search(&25).is_some());
//!
//! t.delete(&25);
//!
//! assert!(t.search(&25).is_none());
//! assert_eq!(t.in_order(), [&10, &20, &27, &28, &30]);
//! ```
//!
//! The tree structure is exposed read-only through [`AvlTree::root()`] and
//! [`AvlTree::edges()`] for consumers that render or inspect it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod iter;
mod node;
mod tree;


pub use iter::{Edge, Edges, IntoIter, Iter, Side};
pub use node::Node;
pub use tree::AvlTree;
