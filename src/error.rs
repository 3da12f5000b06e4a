//! Errors returned by [`Tree`][crate::Tree] operations.

/// Returned when asking for a property that only exists on a non-empty tree, such as
/// [`Tree::height`][crate::Tree::height].
///
/// # Examples
///
/// ```
/// use binarytree::{EmptyTreeError, Tree};
///
/// let tree: Tree<i32> = Tree::new();
/// assert_eq!(tree.height(), Err(EmptyTreeError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot compute the height of an empty tree")]
pub struct EmptyTreeError;
