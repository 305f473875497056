//! A binary search tree with explicit, non-recursive cursors.
//!
//! [`BinarySearchTree`] hands out cursors that implement the two-method [`Cursor`] capability:
//! `has_more` and `get_next`. [`SequenceCursor`] implements the same capability over a borrowed
//! slice, so code written against [`Cursor`] or [`IterableCollection`] works with either.
//!
//! ```
//! use bst_cursor::{bst, Cursor};
//!
//! let tree = bst![5, 3, 8, 1, 4];
//! let mut cursor = tree.create_iterator();
//! while cursor.has_more() {
//!     print!("{} ", cursor.get_next().unwrap());
//! }
//! ```

mod slab;
mod error;
mod sequence;

pub mod cursor;
pub mod tree;

pub use error::CursorError;
pub use cursor::{Cursor, CursorIter, IterableCollection};
pub use sequence::SequenceCursor;
pub use tree::{BinarySearchTree, InorderCursor, Node, PreorderCursor};

#[macro_export(local_inner_macros)]
macro_rules! bst {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$(bst!(@single $rest)),*]));

    ($($value:expr,)+) => { bst!($($value),+) };
    ($($value:expr),*) => {
        {
            let _cap = bst!(@count $($value),*);
            #[allow(unused_mut)]
            let mut _tree = $crate::BinarySearchTree::with_capacity(_cap);
            $(
                _tree.insert($value);
            )*
            _tree
        }
    };
}
