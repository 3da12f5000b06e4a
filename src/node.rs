//! The building block of a [`Tree`][crate::Tree].

use std::fmt;

/// A `Node` stores one value of a [`Tree`][crate::Tree] and exclusively owns its two (optional)
/// children. Nodes are only created by the tree, which keeps the ordering invariant: everything
/// under `left` is smaller than `value` and everything under `right` is greater.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this node has at least one child.
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// The number of edges on the longest downward path from this node to a leaf.
    ///
    /// A leaf has height 0. A missing child counts the same as a leaf child, so a node with a
    /// single leaf child has height 1, exactly like a node with two leaf children.
    pub fn height(&self) -> usize {
        if self.is_leaf() {
            return 0;
        }

        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.value)
    }
}
