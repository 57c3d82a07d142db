//! This crate exposes a persistent Binary Search Tree (BST) holding a set
//! of unique keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores one key and sometimes has
//! child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Together these mean searching for a key takes `O(height)` (where
//! `height` is defined as the longest path from the root `Node` to a leaf
//! `Node`), and that visiting the left subtree, then the subtree root,
//! then the right subtree yields the keys in sorted order.
//!
//! ## Persistence
//!
//! The tree in this crate is persistent: inserting never modifies the tree
//! it is called on. Instead it returns a new tree that shares every
//! subtree off the insertion path with the original, so old versions
//! remain valid and answer queries exactly as they did before. See
//! [`tree`] for the details and the rendering format.
//!
//! The tree performs no balancing. Inserting keys in sorted order builds a
//! chain with `O(n)` height, so the `O(height)` bound above only becomes
//! `O(lg N)` when the insertion order happens to be favorable.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;
