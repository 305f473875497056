use std::fmt;
use std::ptr;

use crate::slab::{Ptr, Slab};

/// Storage for a single node of the tree
///
/// `left` and `right` are the only links that own anything: a node's subtree is exactly the set
/// of nodes reachable through them. `parent` is a back-reference and is never followed by
/// traversal or teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InnerNode<T> {
    pub(crate) value: T,
    pub(crate) left: Ptr,
    pub(crate) right: Ptr,
    pub(crate) parent: Ptr,
}

impl<T> InnerNode<T> {
    pub(crate) fn new(value: T, parent: Ptr) -> Self {
        Self {
            value,
            left: Ptr::null(),
            right: Ptr::null(),
            parent,
        }
    }
}

/// A single node of the binary search tree
///
/// This is a read-only view. Nodes cannot be modified after they are inserted because that could
/// invalidate the ordering of the tree.
pub struct Node<'a, T> {
    nodes: &'a Slab<InnerNode<T>>,
    node: &'a InnerNode<T>,
}

impl<'a, T> Clone for Node<'a, T> {
    fn clone(&self) -> Self {
        Self {..*self}
    }
}

impl<'a, T> Copy for Node<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Node<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only one level deep so that formatting a degenerate tree cannot overflow the stack
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left().map(|node| node.value()))
            .field("right", &self.right().map(|node| node.value()))
            .finish()
    }
}

impl<'a, T: PartialEq> PartialEq for Node<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        // If the pointers are the same, the values are guaranteed to be equal (similar to `Arc`
        // using `ptr_eq` to optimize its `PartialEq` impl)
        let ptr_eq = ptr::eq(self.nodes, other.nodes) && ptr::eq(self.node, other.node);
        ptr_eq || self.value().eq(other.value())
    }
}

impl<'a, T: Eq> Eq for Node<'a, T> {}

impl<'a, T> Node<'a, T> {
    /// Creates a view of the node at `ptr`, or returns `None` if `ptr` is null
    pub(crate) fn new(nodes: &'a Slab<InnerNode<T>>, ptr: Ptr) -> Option<Self> {
        let node = nodes.get(ptr)?;
        Some(Self {nodes, node})
    }

    /// Returns the value of this node
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        !self.node.left.is_null()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        !self.node.right.is_null()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.left)
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.right)
    }

    /// Returns the node this node was attached to when it was inserted, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.parent)
    }

    /// Returns true if this node is the root of its tree
    pub fn is_root(&self) -> bool {
        self.node.parent.is_null()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }
}
