/// Errors returned when a cursor is advanced past its last element
///
/// Both variants mean the caller skipped the `has_more` check. A cursor that returns one of these
/// is left unchanged and keeps returning the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CursorError {
    /// A tree cursor has no nodes left to visit (or the tree was empty)
    #[error("no more elements in the collection")]
    EmptyCollection,
    /// A sequence cursor has already returned the last element of its sequence
    #[error("index out of bounds")]
    IndexOutOfBounds,
}
