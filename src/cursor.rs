//! The traversal capability shared by every cursor in this crate.
//!
//! A cursor is driven by calling [`Cursor::has_more`] before every call to [`Cursor::get_next`].
//! Collections that can hand out a cursor implement [`IterableCollection`], so code that only
//! needs to walk a collection can stay generic over which cursor it gets back.

use std::iter::FusedIterator;

use crate::CursorError;

/// A stateful, single-pass, non-restartable producer of elements
///
/// This trait is object safe, so different kinds of cursor can be mixed behind
/// `Box<dyn Cursor<Item = ...>>`.
pub trait Cursor {
    /// The type of element this cursor produces
    type Item;

    /// Returns true if the next call to `get_next` will succeed
    fn has_more(&self) -> bool;

    /// Returns the next element and advances the cursor
    ///
    /// Returns an error if the cursor has no elements left. Callers that check `has_more` first
    /// never see the error.
    fn get_next(&mut self) -> Result<Self::Item, CursorError>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_more(&self) -> bool {
        (**self).has_more()
    }

    fn get_next(&mut self) -> Result<Self::Item, CursorError> {
        (**self).get_next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_more(&self) -> bool {
        (**self).has_more()
    }

    fn get_next(&mut self) -> Result<Self::Item, CursorError> {
        (**self).get_next()
    }
}

/// A collection that can create a cursor over its elements
///
/// # Examples
///
/// ```
/// use bst_cursor::{BinarySearchTree, Cursor, IterableCollection};
///
/// fn sum<C: IterableCollection<i32> + ?Sized>(collection: &C) -> i32 {
///     let mut cursor = collection.create_iterator();
///     let mut total = 0;
///     while cursor.has_more() {
///         total += cursor.get_next().unwrap();
///     }
///     total
/// }
///
/// let tree: BinarySearchTree<_> = vec![3, 1, 2].into_iter().collect();
/// assert_eq!(sum(&tree), 6);
/// assert_eq!(sum(&[4, 5][..]), 9);
/// ```
pub trait IterableCollection<T> {
    /// The cursor returned by `create_iterator`
    type Cursor<'a>: Cursor<Item = &'a T>
        where Self: 'a,
              T: 'a;

    /// Creates a new cursor positioned before the first element of the collection
    fn create_iterator(&self) -> Self::Cursor<'_>;
}

/// Drives any cursor through the standard `Iterator` interface
///
/// `has_more` is checked before every `get_next`, so iteration ends exactly where the cursor is
/// exhausted.
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        Self {cursor}
    }

    /// Returns the wrapped cursor in whatever position iteration left it
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_more() {
            return None;
        }

        self.cursor.get_next().ok()
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

/// Collects every remaining element of `cursor`
pub fn drain<C: Cursor>(cursor: C) -> Vec<C::Item> {
    CursorIter::new(cursor).collect()
}
