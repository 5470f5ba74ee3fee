//! A collection-style facade over [`OrderedTree`]. This is modeled after the
//! broad sequence interfaces general-purpose containers implement: membership
//! tests, bulk add/remove, conversion to a vector, and iteration, all
//! delegated to the tree underneath.
//!
//! A search tree orders elements by comparison, not by position, so every
//! index-flavored operation (`get`, `set`, `insert_at`, ...) is refused with
//! [`SeqError::Unsupported`] instead of being emulated with a linear scan.
//! The refusal is part of the contract: callers who need positional access
//! need a different container, and pretending otherwise would hide an `O(n)`
//! cost behind an `O(1)`-shaped API.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::seq::TreeSequence;
//!
//! let mut seq = TreeSequence::new();
//! assert!(seq.add(2));
//! assert!(seq.add(1));
//!
//! // Duplicates report that nothing changed.
//! assert!(!seq.add(2));
//!
//! assert!(seq.contains(&1));
//! assert_eq!(seq.to_vec(), [&1, &2]);
//!
//! // Positional access is refused rather than faked.
//! assert!(seq.get(0).is_err());
//! ```

use thiserror::Error;

use crate::tree::{Iter, OrderedTree};

/// Errors surfaced by [`TreeSequence`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeqError {
    /// The named operation addresses elements by index, which a binary
    /// search tree has no efficient way to do.
    #[error("`{0}` is not supported: a binary search tree has no positional access")]
    Unsupported(&'static str),
}

/// Shorthand for the fallible facade operations.
pub type SeqResult<T> = Result<T, SeqError>;

/// A sequence-shaped wrapper around an [`OrderedTree`].
///
/// Supported operations forward to the tree; positional operations return
/// [`SeqError::Unsupported`]. An absent value is never an error here either:
/// [`remove`][TreeSequence::remove] just reports `false`.
#[derive(Clone, Debug)]
pub struct TreeSequence<E> {
    tree: OrderedTree<E>,
}

impl<E> Default for TreeSequence<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<OrderedTree<E>> for TreeSequence<E> {
    fn from(tree: OrderedTree<E>) -> Self {
        Self { tree }
    }
}

impl<E> TreeSequence<E> {
    /// Generates an empty sequence view.
    pub fn new() -> Self {
        Self {
            tree: OrderedTree::new(),
        }
    }

    /// Borrows the underlying tree.
    pub fn as_tree(&self) -> &OrderedTree<E> {
        &self.tree
    }

    /// Unwraps the underlying tree.
    pub fn into_tree(self) -> OrderedTree<E> {
        self.tree
    }

    /// Whether an equal value is stored.
    pub fn contains(&self, value: &E) -> bool
    where
        E: Ord,
    {
        self.tree.find(value).is_some()
    }

    /// Whether every yielded value is stored.
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        E: Ord + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Adds the value, reporting whether the sequence changed. Adding a
    /// value that is already present changes nothing.
    pub fn add(&mut self, value: E) -> bool
    where
        E: Ord,
    {
        if self.contains(&value) {
            return false;
        }
        self.tree.insert(value);
        true
    }

    /// Adds every yielded value, reporting whether the sequence changed.
    pub fn add_all<I>(&mut self, values: I) -> bool
    where
        E: Ord,
        I: IntoIterator<Item = E>,
    {
        let before = self.len();
        self.tree.extend(values);
        self.len() != before
    }

    /// Removes the value if present, reporting whether it was.
    pub fn remove(&mut self, value: &E) -> bool
    where
        E: Ord,
    {
        let present = self.contains(value);
        self.tree.delete(value);
        present
    }

    /// Removes every yielded value, reporting whether the sequence changed.
    pub fn remove_all<'a, I>(&mut self, values: I) -> bool
    where
        E: Ord + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove(value);
        }
        changed
    }

    /// Snapshots the stored values in ascending order.
    pub fn to_vec(&self) -> Vec<&E> {
        self.tree.in_order()
    }

    /// Iterates over the stored values in ascending order.
    pub fn iter(&self) -> Iter<'_, E> {
        self.tree.iter()
    }

    /// The number of stored values.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Positional read. Always refused.
    pub fn get(&self, _index: usize) -> SeqResult<&E> {
        Err(SeqError::Unsupported("get"))
    }

    /// Positional overwrite. Always refused.
    pub fn set(&mut self, _index: usize, _value: E) -> SeqResult<E> {
        Err(SeqError::Unsupported("set"))
    }

    /// Positional insertion. Always refused.
    pub fn insert_at(&mut self, _index: usize, _value: E) -> SeqResult<()> {
        Err(SeqError::Unsupported("insert_at"))
    }

    /// Positional removal. Always refused.
    pub fn remove_at(&mut self, _index: usize) -> SeqResult<E> {
        Err(SeqError::Unsupported("remove_at"))
    }

    /// Position lookup. Always refused.
    pub fn index_of(&self, _value: &E) -> SeqResult<usize> {
        Err(SeqError::Unsupported("index_of"))
    }

    /// Position lookup from the back. Always refused.
    pub fn last_index_of(&self, _value: &E) -> SeqResult<usize> {
        Err(SeqError::Unsupported("last_index_of"))
    }

    /// Positional slicing. Always refused.
    pub fn sub_seq(&self, _from: usize, _to: usize) -> SeqResult<Vec<&E>> {
        Err(SeqError::Unsupported("sub_seq"))
    }

    /// Predicate-driven bulk retention. Refused: it is specified in terms of
    /// positional iteration over the sequence.
    pub fn retain<F>(&mut self, _keep: F) -> SeqResult<()>
    where
        F: FnMut(&E) -> bool,
    {
        Err(SeqError::Unsupported("retain"))
    }
}

impl<'a, E> IntoIterator for &'a TreeSequence<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
