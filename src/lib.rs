//! This crate exposes an unbalanced Binary Search Tree (BST) mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the value that was inserted
//! and will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does not
//! rebalance itself, so its shape depends entirely on the order values were
//! inserted in. Inserting values in ascending order gives a chain whose height is
//! `N - 1`.
//!
//! ## Traversals
//!
//! The tree can be walked in four orders:
//!
//! - in-order: left subtree, then the node, then the right subtree. For a BST this
//!   yields the values sorted ascending.
//! - pre-order: the node, then the left subtree, then the right subtree.
//! - post-order: the left subtree, then the right subtree, then the node.
//! - level-order: breadth first, one depth at a time, left to right.
//!
//! ```
//! use binarytree::Tree;
//!
//! let tree: Tree<_> = [4, 2, 6, 1, 3, 5, 7].iter().copied().collect();
//!
//! assert_eq!(tree.items_in_order(), [&1, &2, &3, &4, &5, &6, &7]);
//! assert_eq!(tree.items_pre_order(), [&4, &2, &1, &3, &6, &5, &7]);
//! assert_eq!(tree.items_post_order(), [&1, &3, &2, &5, &7, &6, &4]);
//! assert_eq!(tree.items_level_order(), [&4, &2, &6, &1, &3, &5, &7]);
//! assert_eq!(tree.height(), Ok(2));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod tree;

#[cfg(test)]
mod test;

pub use error::EmptyTreeError;
pub use node::Node;
pub use tree::{Iter, Tree};
