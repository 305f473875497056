use std::fmt;
use std::iter::FusedIterator;

use crate::{Cursor, CursorError, IterableCollection};

/// A cursor over a borrowed, fixed-length sequence
///
/// Elements are produced front to back in their original order. The sequence itself is never
/// modified or reordered.
///
/// # Examples
///
/// ```
/// use bst_cursor::{Cursor, CursorError, SequenceCursor};
///
/// let values = [7, 2, 9];
/// let mut cursor = SequenceCursor::new(&values);
/// assert_eq!(cursor.get_next(), Ok(&7));
/// assert_eq!(cursor.get_next(), Ok(&2));
/// assert_eq!(cursor.get_next(), Ok(&9));
/// assert!(!cursor.has_more());
/// assert_eq!(cursor.get_next(), Err(CursorError::IndexOutOfBounds));
/// ```
pub struct SequenceCursor<'a, T> {
    items: &'a [T],
    /// The index of the next element to return
    index: usize,
}

impl<'a, T> Clone for SequenceCursor<'a, T> {
    fn clone(&self) -> Self {
        Self {..*self}
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for SequenceCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceCursor")
            .field("len", &self.items.len())
            .field("index", &self.index)
            .field("next", &self.items.get(self.index))
            .finish()
    }
}

impl<'a, T> SequenceCursor<'a, T> {
    /// Creates a cursor positioned at the first element of `items`
    ///
    /// The length of the sequence is the length of the slice. To walk only a prefix, pass a
    /// shorter slice.
    pub fn new(items: &'a [T]) -> Self {
        Self {items, index: 0}
    }

    /// Returns the number of elements not yet produced
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.index)
    }
}

impl<'a, T> Cursor for SequenceCursor<'a, T> {
    type Item = &'a T;

    fn has_more(&self) -> bool {
        self.index < self.items.len()
    }

    fn get_next(&mut self) -> Result<Self::Item, CursorError> {
        let items = self.items;
        match items.get(self.index) {
            Some(item) => {
                self.index += 1;
                Ok(item)
            },

            None => {
                tracing::trace!(index = self.index, len = items.len(), "sequence cursor read past the end");
                Err(CursorError::IndexOutOfBounds)
            },
        }
    }
}

impl<'a, T> Iterator for SequenceCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }

        self.get_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for SequenceCursor<'a, T> {}

impl<'a, T> FusedIterator for SequenceCursor<'a, T> {}

impl<T> IterableCollection<T> for [T] {
    type Cursor<'a> = SequenceCursor<'a, T>
        where Self: 'a,
              T: 'a;

    fn create_iterator(&self) -> Self::Cursor<'_> {
        SequenceCursor::new(self)
    }
}
