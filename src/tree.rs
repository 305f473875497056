mod node;
mod inorder;
mod preorder;

pub use node::*;
pub use inorder::*;
pub use preorder::*;

use std::fmt;
use std::borrow::Borrow;
use std::iter::FromIterator;

use crate::IterableCollection;
use crate::slab::{Ptr, Slab};

/// A binary search tree (BST)
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than or equal to `v`
///
/// Duplicate values are allowed and are always placed in the right subtree, so they are visited
/// next to each other by the in-order cursor.
///
/// The tree is never rebalanced. Inserting values in sorted order produces a tree whose depth is
/// equal to its length. Every operation that walks the tree does so with an explicit stack, so a
/// degenerate tree costs time but never call stack space.
///
/// Cursors borrow the tree, so the tree cannot be modified while any cursor over it is alive.
pub struct BinarySearchTree<T> {
    nodes: Slab<InnerNode<T>>,
    root: Ptr,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self {
            nodes: Slab::new(),
            root: Ptr::null(),
        }
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        // Pointers are indexes into `nodes`, so copying the slab entry for entry keeps every link
        // valid in the new tree
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_inorder()).finish()
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Trees built from the same values in a different order have different shapes, so compare
        // the values in sorted order instead of comparing structure
        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|(v1, v2)| v1.eq(v2))
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree
    ///
    /// The tree is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_cursor::BinarySearchTree;
    /// let tree: BinarySearchTree<i32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with space for at least `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: Ptr::null(),
        }
    }

    /// Returns the number of values in the tree, counting duplicates
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no root
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.nodes.is_empty(), self.root.is_null());
        self.root.is_null()
    }

    /// Returns the number of values the tree can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves capacity for at least `additional` more values
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional)
    }

    /// Shrinks the capacity of the tree as much as possible
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals. For values in
    /// a guaranteed order, use a cursor.
    pub fn root(&self) -> Option<Node<T>> {
        Node::new(&self.nodes, self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf
    ///
    /// Time complexity: `O(n)`
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Ptr, usize)> = Vec::new();
        if !self.root.is_null() {
            stack.push((self.root, 1));
        }

        while let Some((ptr, depth)) = stack.pop() {
            let node = match self.nodes.get(ptr) {
                Some(node) => node,
                None => continue,
            };

            max_depth = max_depth.max(depth);
            if !node.left.is_null() {
                stack.push((node.left, depth + 1));
            }
            if !node.right.is_null() {
                stack.push((node.right, depth + 1));
            }
        }

        max_depth
    }

    /// Removes every value from the tree
    ///
    /// Nodes are released one at a time from an explicit stack, starting from the root, so
    /// clearing a tree of any shape uses a constant amount of call stack. The allocated capacity
    /// of the tree is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_cursor::{BinarySearchTree, Cursor};
    ///
    /// let mut tree: BinarySearchTree<_> = (0..100).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(!tree.create_iterator().has_more());
    /// ```
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        let mut released = 0usize;
        let mut stack = vec![self.root];
        while let Some(ptr) = stack.pop() {
            if let Some(node) = self.nodes.remove(ptr) {
                if !node.right.is_null() {
                    stack.push(node.right);
                }
                if !node.left.is_null() {
                    stack.push(node.left);
                }

                released += 1;
            }
        }

        debug_assert!(self.nodes.is_empty());
        self.nodes.clear();
        self.root = Ptr::null();

        tracing::debug!(released, "cleared binary search tree");
    }

    /// Creates a cursor that visits every value in ascending order
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_cursor::{BinarySearchTree, Cursor};
    ///
    /// let tree: BinarySearchTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    /// let mut cursor = tree.create_iterator();
    /// let mut values = Vec::new();
    /// while cursor.has_more() {
    ///     values.push(*cursor.get_next().unwrap());
    /// }
    /// assert_eq!(values, &[1, 3, 4, 5, 8]);
    /// ```
    pub fn create_iterator(&self) -> InorderCursor<T> {
        InorderCursor::new(&self.nodes, self.root)
    }

    /// Creates a cursor that visits each node before its subtrees
    pub fn create_preorder_cursor(&self) -> PreorderCursor<T> {
        PreorderCursor::new(&self.nodes, self.root)
    }

    /// Returns a cursor at the first value in ascending order
    ///
    /// Same as `create_iterator`. Together with `end`, this lets a loop compare cursor positions
    /// instead of calling `has_more`.
    pub fn begin(&self) -> InorderCursor<T> {
        self.create_iterator()
    }

    /// Returns the exhausted cursor that every in-order cursor over this tree ends at
    pub fn end(&self) -> InorderCursor<T> {
        InorderCursor::exhausted(&self.nodes)
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> InorderCursor<T> {
        self.create_iterator()
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> PreorderCursor<T> {
        self.create_preorder_cursor()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts a value into the tree
    ///
    /// The value is attached as a new leaf below the last node visited while descending from the
    /// root: values less than a node go left, all others (including equal values) go right.
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_cursor::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(37);
    /// tree.insert(37);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut parent = Ptr::null();
        let mut goes_left = false;

        let mut current = self.root;
        while let Some(node) = self.nodes.get(current) {
            parent = current;
            goes_left = value < node.value;
            current = if goes_left { node.left } else { node.right };
        }

        let ptr = self.nodes.push(InnerNode::new(value, parent));
        match self.nodes.get_mut(parent) {
            Some(parent_node) if goes_left => parent_node.left = ptr,
            Some(parent_node) => parent_node.right = ptr,
            None => self.root = ptr,
        }
    }

    /// Returns the node holding a value equal to `value`, or `None` if there is no such node
    ///
    /// If the value was inserted more than once, the node closest to the root is returned.
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_cursor::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.find("abc").map(|node| node.value().as_str()), Some("abc"));
    /// assert!(tree.find("def").is_none());
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Option<Node<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            let node_value: &Q = node.value().borrow();
            if value == node_value {
                return Some(node);
            }

            current = if value < node_value { node.left() } else { node.right() };
        }

        None
    }

    /// Returns true if the tree contains a value equal to `value`
    ///
    /// Time complexity: `O(depth)`
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }
}

impl<T> IterableCollection<T> for BinarySearchTree<T> {
    type Cursor<'a> = InorderCursor<'a, T>
        where Self: 'a,
              T: 'a;

    fn create_iterator(&self) -> Self::Cursor<'_> {
        BinarySearchTree::create_iterator(self)
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = InorderCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);

        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
