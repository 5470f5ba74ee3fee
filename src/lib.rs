//! This crate exposes an ordered, set-like container backed by a plain
//! (unbalanced) Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching the tree takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`), and visiting the left subtree,
//! then the subtree root, then the right subtree enumerates the values in
//! ascending order. Because nothing here rebalances, the height depends on
//! the insertion order: a lucky order gives `O(lg N)` for `N` nodes, a
//! sorted order degrades the tree into a list.
//!
//! The [`tree`] module holds the container itself. The [`seq`] module wraps
//! it in a broader, sequence-shaped interface that refuses index-based
//! operations instead of emulating them.

#![deny(missing_docs)]

pub mod seq;
pub mod tree;

#[cfg(test)]
pub(crate) mod test;
