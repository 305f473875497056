//! Based on: https://github.com/tokio-rs/tokio/blob/d74d17307dd53215061c4a8a1f20a0e30461e296/tokio/tests/async_send_sync.rs

#![warn(rust_2018_idioms)]

use std::{any::Any, cell::Cell};
use std::rc::Rc;

use bst_cursor::{
    BinarySearchTree,
    CursorError,
    CursorIter,
    InorderCursor,
    Node,
    PreorderCursor,
    SequenceCursor,
};

fn require_send<T: Send>(_t: &T) {}
fn require_sync<T: Sync>(_t: &T) {}

struct NotSend {
    _a: Box<dyn Any + Sync>,
}

impl PartialEq for NotSend {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl Eq for NotSend {}

impl PartialOrd for NotSend {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NotSend {
    fn cmp(&self, _other: &Self) -> std::cmp::Ordering {
        std::cmp::Ordering::Equal
    }
}

struct Invalid;

trait AmbiguousIfSend<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSend<()> for T {}
impl<T: ?Sized + Send> AmbiguousIfSend<Invalid> for T {}

trait AmbiguousIfSync<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSync<()> for T {}
impl<T: ?Sized + Sync> AmbiguousIfSync<Invalid> for T {}

macro_rules! assert_value {
    ($type:ty: Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            require_sync(&f);
        };
    };
    ($type:ty: !Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            require_sync(&f);
        };
    };
    ($type:ty: Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
    ($type:ty: !Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
}

assert_value!(CursorError: Send & Sync);

assert_value!(BinarySearchTree<i32>: Send & Sync);
assert_value!(BinarySearchTree<Rc<i32>>: !Send & !Sync);
assert_value!(BinarySearchTree<Cell<i32>>: Send & !Sync);
assert_value!(BinarySearchTree<NotSend>: !Send & Sync);

assert_value!(Node<'_, i32>: Send & Sync);
assert_value!(Node<'_, Rc<i32>>: !Send & !Sync);
assert_value!(Node<'_, Cell<i32>>: !Send & !Sync);
assert_value!(Node<'_, NotSend>: Send & Sync);

assert_value!(InorderCursor<'_, i32>: Send & Sync);
assert_value!(InorderCursor<'_, Rc<i32>>: !Send & !Sync);
assert_value!(InorderCursor<'_, Cell<i32>>: !Send & !Sync);
assert_value!(InorderCursor<'_, NotSend>: Send & Sync);

assert_value!(PreorderCursor<'_, i32>: Send & Sync);
assert_value!(PreorderCursor<'_, Rc<i32>>: !Send & !Sync);
assert_value!(PreorderCursor<'_, Cell<i32>>: !Send & !Sync);
assert_value!(PreorderCursor<'_, NotSend>: Send & Sync);

assert_value!(SequenceCursor<'_, i32>: Send & Sync);
assert_value!(SequenceCursor<'_, Rc<i32>>: !Send & !Sync);
assert_value!(SequenceCursor<'_, Cell<i32>>: !Send & !Sync);
assert_value!(SequenceCursor<'_, NotSend>: Send & Sync);

assert_value!(CursorIter<InorderCursor<'_, i32>>: Send & Sync);
assert_value!(CursorIter<SequenceCursor<'_, Rc<i32>>>: !Send & !Sync);
