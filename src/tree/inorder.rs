use std::fmt;
use std::ptr;
use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};
use crate::{Cursor, CursorError};

use super::InnerNode;

/// A cursor that visits the values of a tree in ascending order
///
/// The cursor keeps the next node to visit pre-loaded in `current`, with the nodes still waiting
/// to be visited on an explicit stack. The stack never holds more than one node per level of the
/// tree, and no step of the traversal recurses, so even a fully degenerate tree is walked in
/// constant call stack depth.
///
/// Duplicate values are produced next to each other, in the order they were inserted.
pub struct InorderCursor<'a, T> {
    nodes: &'a Slab<InnerNode<T>>,
    /// The node the next call to `get_next` will return, or null if it must come from `stack`
    current: Ptr,
    /// Nodes whose value and right subtree have not been visited yet. The top of the stack is the
    /// smallest of them.
    stack: Vec<Ptr>,
}

impl<'a, T> Clone for InorderCursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for InorderCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InorderCursor")
            .field("next", &self.peek())
            .field("pending", &self.stack.len())
            .finish()
    }
}

/// Two cursors are equal when they are over the same tree and will visit the same node next
///
/// In particular, every exhausted cursor over a tree is equal to that tree's `end()` cursor.
impl<'a, T> PartialEq for InorderCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.next_ptr() == other.next_ptr()
    }
}

impl<'a, T> Eq for InorderCursor<'a, T> {}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> InorderCursor<'a, T> {
    pub(crate) fn new(nodes: &'a Slab<InnerNode<T>>, root: Ptr) -> Self {
        let mut cursor = Self::exhausted(nodes);
        cursor.push_left_spine(root);
        cursor.load_next();
        cursor
    }

    /// Creates a cursor that has nothing left to visit
    pub(crate) fn exhausted(nodes: &'a Slab<InnerNode<T>>) -> Self {
        Self {
            nodes,
            current: Ptr::null(),
            stack: Vec::new(),
        }
    }

    /// Returns the value the next call to `get_next` will return, without advancing the cursor
    pub fn peek(&self) -> Option<&'a T> {
        let nodes = self.nodes;
        nodes.get(self.next_ptr()).map(|node| &node.value)
    }

    /// Returns true if this cursor has visited every node
    pub fn is_exhausted(&self) -> bool {
        !self.has_more()
    }

    /// The node that will be visited next, whether or not it has been loaded into `current` yet
    fn next_ptr(&self) -> Ptr {
        if self.current.is_null() {
            self.stack.last().copied().unwrap_or_default()
        } else {
            self.current
        }
    }

    /// Pushes `ptr` and every node reachable by following left links from it
    fn push_left_spine(&mut self, mut ptr: Ptr) {
        while let Some(node) = self.nodes.get(ptr) {
            self.stack.push(ptr);
            ptr = node.left;
        }
    }

    /// Moves the top of the stack into `current` if `current` is empty
    fn load_next(&mut self) {
        if self.current.is_null() {
            if let Some(ptr) = self.stack.pop() {
                self.current = ptr;
            }
        }
    }
}

impl<'a, T> Cursor for InorderCursor<'a, T> {
    type Item = &'a T;

    fn has_more(&self) -> bool {
        !self.current.is_null() || !self.stack.is_empty()
    }

    fn get_next(&mut self) -> Result<Self::Item, CursorError> {
        self.load_next();

        let nodes = self.nodes;
        let node = match nodes.get(self.current) {
            Some(node) => node,
            None => {
                tracing::trace!("in-order cursor has no more nodes");
                return Err(CursorError::EmptyCollection);
            },
        };

        // Everything in the right subtree comes before anything already on the stack
        self.push_left_spine(node.right);
        self.current = Ptr::null();

        // Look ahead so `has_more` reflects whether the *next* call will succeed
        self.load_next();

        Ok(&node.value)
    }
}

impl<'a, T> Iterator for InorderCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }

        self.get_next().ok()
    }
}

impl<'a, T> FusedIterator for InorderCursor<'a, T> {}
