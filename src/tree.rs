//! An unbalanced BST of owned nodes. Each [`Node`] exclusively owns its children and the
//! [`Tree`] owns the root, so dropping the tree drops every value in it.
//!
//! # Examples
//!
//! ```
//! use binarytree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.height().is_err());
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(2);
//! tree.insert(1);
//! assert_eq!(tree.search(&1), Some(&1));
//! assert_eq!(tree.len(), 2);
//!
//! // Inserting a value that is already present changes nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! assert_eq!(tree.items_in_order(), [&1, &2]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use log::{debug, trace};

use crate::error::EmptyTreeError;
use crate::node::Node;

/// An unbalanced Binary Search Tree. This can be used for inserting and finding values and for
/// walking them in in-order, pre-order, post-order, or level-order. Values equal to one already
/// in the tree are ignored on insert.
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Tear down with an explicit stack so a degenerate chain can't overflow the call stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // Copies children before their parent with an explicit stack, like `drop`.
    fn clone(&self) -> Self {
        let mut pending: Vec<(&Node<T>, bool)> =
            self.root().map(|n| (n, false)).into_iter().collect();
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        while let Some((node, children_built)) = pending.pop() {
            if children_built {
                let mut copy = Node::new(node.value().clone());
                // The left subtree was finished first so it sits below the right one.
                if node.right.is_some() {
                    copy.right = built.pop();
                }
                if node.left.is_some() {
                    copy.left = built.pop();
                }
                built.push(Box::new(copy));
            } else {
                pending.push((node, true));
                pending.extend(node.right().map(|n| (n, false)));
                pending.extend(node.left().map(|n| (n, false)));
            }
        }

        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree({} nodes)", self.size)
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Generate a `Tree` by inserting each of `items` in order. The order matters: the tree is
    /// never rebalanced so its shape is decided by the insertion sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let tree = Tree::with_items(vec![1, 2, 3]);
    ///
    /// // Ascending input makes a chain.
    /// assert_eq!(tree.height(), Ok(2));
    /// assert_eq!(tree.items_pre_order(), [&1, &2, &3]);
    /// ```
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        items.into_iter().collect()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of edges on the longest path from the root to a leaf. A tree with a single
    /// node has height 0. An empty tree has no height and returns [`EmptyTreeError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{EmptyTreeError, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), Err(EmptyTreeError));
    ///
    /// tree.insert(5);
    /// assert_eq!(tree.height(), Ok(0));
    /// ```
    pub fn height(&self) -> Result<usize, EmptyTreeError> {
        match self.root() {
            Some(root) => Ok(root.height()),
            None => {
                debug!("height requested on an empty tree");
                Err(EmptyTreeError)
            }
        }
    }

    /// Returns `true` if a value equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.search(item).is_some()
    }

    /// Potentially finds the stored value equal to `item`. If no node holds an equal value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let tree = Tree::with_items(vec![2, 1, 3]);
    ///
    /// assert_eq!(tree.search(&3), Some(&3));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match item.cmp(n.value()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n.value()),
                Ordering::Greater => n.right(),
            };
        }

        None
    }

    /// Inserts `item` into the tree. The new node is attached below the first node on the
    /// search path that has no child on the side `item` belongs to. If a node on that path
    /// already holds an equal value nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(5);
    /// tree.insert(5);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = match item.cmp(node.value()) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!("ignoring duplicate value found at depth {}", depth);
                    return;
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *slot = Some(Box::new(Node::new(item)));
        self.size += 1;
        trace!("attached node at depth {}, size is now {}", depth, self.size);
    }

    /// The smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Lazily iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::Tree;
    ///
    /// let tree = Tree::with_items(vec![3, 1, 2]);
    /// let doubled: Vec<_> = tree.iter().map(|x| x * 2).collect();
    ///
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.size)
    }

    /// Calls `visit` on every value: left subtree, then the node, then the right subtree.
    pub fn traverse_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            walk_in_order(root, &mut visit);
        }
    }

    /// Calls `visit` on every value: the node, then the left subtree, then the right subtree.
    pub fn traverse_pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            walk_pre_order(root, &mut visit);
        }
    }

    /// Calls `visit` on every value: the left subtree, then the right subtree, then the node.
    pub fn traverse_post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            walk_post_order(root, &mut visit);
        }
    }

    /// Calls `visit` on every value breadth first: the root, then every node at depth 1 from
    /// left to right, then depth 2 and so on.
    pub fn traverse_level_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let mut queue: VecDeque<&'a Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node.value());
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// The values in in-order, which is ascending for a BST.
    pub fn items_in_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        self.traverse_in_order(|item| items.push(item));
        items
    }

    /// The values in pre-order. The first one is the root's.
    pub fn items_pre_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        self.traverse_pre_order(|item| items.push(item));
        items
    }

    /// The values in post-order. The last one is the root's.
    pub fn items_post_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        self.traverse_post_order(|item| items.push(item));
        items
    }

    /// The values in level-order.
    pub fn items_level_order(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        self.traverse_level_order(|item| items.push(item));
        items
    }
}

fn walk_in_order<'a, T, F>(node: &'a Node<T>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(left) = node.left() {
        walk_in_order(left, visit);
    }
    visit(node.value());
    if let Some(right) = node.right() {
        walk_in_order(right, visit);
    }
}

fn walk_pre_order<'a, T, F>(node: &'a Node<T>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    visit(node.value());
    if let Some(left) = node.left() {
        walk_pre_order(left, visit);
    }
    if let Some(right) = node.right() {
        walk_pre_order(right, visit);
    }
}

fn walk_post_order<'a, T, F>(node: &'a Node<T>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(left) = node.left() {
        walk_post_order(left, visit);
    }
    if let Some(right) = node.right() {
        walk_post_order(right, visit);
    }
    visit(node.value());
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy in-order iterator over a [`Tree`], created by [`Tree::iter`].
///
/// It holds the unvisited left spine of the current subtree on a stack, so it needs
/// `O(height)` space and no recursion.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
