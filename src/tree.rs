//! A persistent BST holding a set of unique keys. This is modeled after a
//! BST one would see in a functional language like Haskell. The one
//! operation that one would expect to modify the tree (`insert`) instead
//! returns a new tree that references many of the nodes of the original
//! tree.
//!
//! # Examples
//!
//! ```
//! use persistent_bst::tree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.size(), 0);
//!
//! // This `insert` returns a new tree!
//! let tree_with_b = tree.insert("b".to_string());
//!
//! // The new tree has the key but the old one doesn't.
//! assert!(tree_with_b.contains("b"));
//! assert!(!tree.contains("b"));
//!
//! // Keep inserting to grow the set; every version stays valid.
//! let bigger = tree_with_b.insert("a".to_string()).insert("c".to_string());
//!
//! assert_eq!(bigger.size(), 3);
//! assert_eq!(tree_with_b.size(), 1);
//!
//! // In-order rendering wraps each non-empty child in parentheses.
//! assert_eq!(bigger.to_string(), "(a)b(c)");
//! ```

use std::borrow::Borrow;
use std::cmp;
use std::fmt;
use std::sync::Arc;

/// A Binary Search Tree holding a set of unique keys. Note that this data
/// structure is functional - the operation that would modify the tree
/// instead returns a new tree, and untouched subtrees are shared between
/// the old and new versions rather than copied.
///
/// The tree never rebalances itself, so its height depends on the
/// insertion order and can reach the number of keys for sorted input.
///
/// Keys may be any type with a total order; the [`Ord`] implementation is
/// trusted to be lawful. An `Ord` that is inconsistent with itself
/// silently corrupts the search invariant - lookups may then miss keys
/// that were inserted.
pub enum Tree<K> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node<K>),
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Manual implementation of `Clone` so cloning a tree only bumps reference
/// counts instead of requiring `K: Clone`.
impl<K> Clone for Tree<K> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns a new tree that includes a node containing the given key,
    /// plus everything already present. Inserting a key that is already in
    /// the tree returns an equivalent tree - duplicates are silently
    /// dropped, never stored twice.
    ///
    /// Only the nodes on the path from the root to the insertion point are
    /// rebuilt; every subtree hanging off that path is shared with the
    /// receiver by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert("b".to_string());
    /// let newer_tree = new_tree.insert("b".to_string());
    ///
    /// // The duplicate insert changed nothing, and all history is preserved.
    /// assert_eq!(newer_tree.size(), 1);
    /// assert!(new_tree.contains("b"));
    /// assert!(!tree.contains("b"));
    /// ```
    pub fn insert(&self, key: K) -> Self
    where
        K: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::Node(Node::new(key)),
            Self::Node(n) => Self::Node(n.insert(key)),
        }
    }

    /// Returns whether the given key exists in this tree. Exactly one
    /// root-to-leaf comparison path is followed, so this is `O(height)`.
    ///
    /// The key may be borrowed in any form the stored key type borrows as,
    /// so a `Tree<String>` can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::tree::Tree;
    ///
    /// let tree = Tree::new().insert("b".to_string());
    ///
    /// assert!(tree.contains("b"));
    /// assert!(!tree.contains("z"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => n.contains(key),
        }
    }

    /// Returns the number of keys in this tree.
    ///
    /// The count is not cached; every call walks the whole tree in `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// assert_eq!(tree.size(), 0);
    ///
    /// // Duplicate inserts don't count.
    /// let tree = tree.insert("x".to_string()).insert("x".to_string());
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.size(),
        }
    }

    /// Returns whether this tree has no keys in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// assert!(tree.is_empty());
    /// assert!(!tree.insert("a".to_string()).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }
}

/// Renders the in-order structure of the tree.
///
/// A node renders as its left subtree wrapped in parentheses (or nothing
/// when that child is empty), then its key, then the right subtree
/// likewise, recursively. The empty tree renders as the empty string.
/// Inserting `"b"`, `"a"`, `"c"` therefore renders as `"(a)b(c)"`, and a
/// lone key renders bare, with no parentheses at all.
///
/// The parenthesization reflects the shape of the tree, and the shape
/// depends on insertion order - only the left-to-right key order is
/// guaranteed to be sorted.
///
/// Known limitation: keys render with their own `Display` output and
/// nothing else, so an empty-string key contributes no text and a tree
/// holding only `""` renders exactly like the empty tree.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => Ok(()),
            Self::Node(n) => n.fmt(f),
        }
    }
}

/// A `Child` is a shared handle on a subtree. Cloning it shares the
/// subtree instead of copying it, which is what makes `insert` cheap: the
/// untouched half of every node on the insertion path is reused as-is.
struct Child<K>(Arc<Tree<K>>);

impl<K> Clone for Child<K> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<K> Child<K> {
    fn new() -> Self {
        Self(Arc::new(Tree::new()))
    }

    fn insert(&self, key: K) -> Self
    where
        K: cmp::Ord,
    {
        Self(Arc::new(self.0.insert(key)))
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        self.0.contains(key)
    }

    fn size(&self) -> usize {
        self.0.size()
    }
}

/// A `Node` has a key that is used for searching/sorting and two children,
/// either of which may be a [`Leaf`][Tree::Leaf].
pub struct Node<K> {
    key: Arc<K>,
    left: Child<K>,
    right: Child<K>,
}

/// Manual implementation of `Clone` so we don't clone keys when the
/// generic parameter isn't `Clone` itself.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<K> Clone for Node<K> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<K> Node<K> {
    /// Construct a new `Node` with the given `key` and no children.
    fn new(key: K) -> Self {
        Self {
            key: Arc::new(key),
            left: Child::new(),
            right: Child::new(),
        }
    }

    fn insert(&self, key: K) -> Self
    where
        K: cmp::Ord,
    {
        match key.cmp(&self.key) {
            cmp::Ordering::Less => Self {
                key: Arc::clone(&self.key),
                left: self.left.insert(key),
                right: self.right.clone(),
            },
            // No duplicates. The result is equivalent to the receiver and
            // shares both children with it.
            cmp::Ordering::Equal => self.clone(),
            cmp::Ordering::Greater => Self {
                key: Arc::clone(&self.key),
                left: self.left.clone(),
                right: self.right.insert(key),
            },
        }
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: cmp::Ord + ?Sized,
    {
        match key.cmp((*self.key).borrow()) {
            cmp::Ordering::Less => self.left.contains(key),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => self.right.contains(key),
        }
    }

    fn size(&self) -> usize {
        self.left.size() + 1 + self.right.size()
    }
}

impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Tree::Node(left) = self.left.0.as_ref() {
            write!(f, "({})", left)?;
        }
        write!(f, "{}", self.key)?;
        if let Tree::Node(right) = self.right.0.as_ref() {
            write!(f, "({})", right)?;
        }
        Ok(())
    }
}
