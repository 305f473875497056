use std::fmt;
use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};
use crate::{Cursor, CursorError};

use super::InnerNode;

/// A cursor that visits each node before its left subtree and its left subtree before its right
/// subtree
///
/// Like [`InorderCursor`](super::InorderCursor), the next node is kept pre-loaded so that
/// `has_more` is exact, and the pending right subtrees live on an explicit stack.
pub struct PreorderCursor<'a, T> {
    nodes: &'a Slab<InnerNode<T>>,
    current: Ptr,
    /// Right children whose subtrees have not been visited yet
    stack: Vec<Ptr>,
}

impl<'a, T> Clone for PreorderCursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for PreorderCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreorderCursor")
            .field("next", &self.nodes.get(self.current).map(|node| &node.value))
            .field("pending", &self.stack.len())
            .finish()
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, T> PreorderCursor<'a, T> {
    pub(crate) fn new(nodes: &'a Slab<InnerNode<T>>, root: Ptr) -> Self {
        Self {
            nodes,
            current: root,
            stack: Vec::new(),
        }
    }

    fn load_next(&mut self) {
        if self.current.is_null() {
            if let Some(ptr) = self.stack.pop() {
                self.current = ptr;
            }
        }
    }
}

impl<'a, T> Cursor for PreorderCursor<'a, T> {
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
                tracing::trace!("pre-order cursor has no more nodes");
                return Err(CursorError::EmptyCollection);
            },
        };

        if !node.right.is_null() {
            self.stack.push(node.right);
        }
        self.current = node.left;
        self.load_next();

        Ok(&node.value)
    }
}

impl<'a, T> Iterator for PreorderCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }

        self.get_next().ok()
    }
}

impl<'a, T> FusedIterator for PreorderCursor<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::BinarySearchTree;

    use super::*;

    #[test]
    fn node_then_left_then_right() {
        let tree: BinarySearchTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
        let values: Vec<_> = tree.iter_preorder().copied().collect();
        assert_eq!(values, &[5, 3, 1, 4, 8]);
    }

    #[test]
    fn exhaustion() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        let mut cursor = tree.create_preorder_cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.get_next(), Err(CursorError::EmptyCollection));

        let tree: BinarySearchTree<_> = vec![2, 1].into_iter().collect();
        let mut cursor = tree.create_preorder_cursor();
        assert_eq!(cursor.get_next(), Ok(&2));
        assert!(cursor.has_more());
        assert_eq!(cursor.get_next(), Ok(&1));
        assert!(!cursor.has_more());
        assert_eq!(cursor.get_next(), Err(CursorError::EmptyCollection));
    }
}
