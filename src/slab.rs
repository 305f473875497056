#[cfg(test)]
use static_assertions::{assert_impl_all, const_assert_eq};

/// An index into a slab, or "null"
///
/// This type is essentially `Option<usize>`. The value usize::MAX is
/// reserved to represent `None` or "null".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Ptr(usize);

// Every node stores three of these, so keep them as small as a plain index
#[cfg(test)]
const_assert_eq!(std::mem::size_of::<Ptr>(), std::mem::size_of::<usize>());
#[cfg(test)]
assert_impl_all!(Ptr: Copy, Send, Sync);

impl Default for Ptr {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl Ptr {
    #[inline(always)]
    pub fn new(index: usize) -> Option<Self> {
        if index == usize::MAX {
            None
        } else {
            Some(Ptr(index))
        }
    }

    #[inline(always)]
    pub fn null() -> Self {
        Ptr(usize::MAX)
    }

    // Methods on this type must be `#[inline]` so the compiler can see through the intermediate
    // `Option` and only compare against `usize::MAX`.
    #[inline(always)]
    pub fn into_index(self) -> Option<usize> {
        let Ptr(index) = self;
        if index == usize::MAX {
            None
        } else {
            Some(index)
        }
    }

    #[inline(always)]
    pub fn is_null(self) -> bool {
        self.0 == usize::MAX
    }
}

/// Node storage for the tree
///
/// Values are addressed by the `Ptr` returned from `push`. Removing a value leaves its slot vacant
/// without shifting any other entry, so every other `Ptr` stays valid. Vacant slots are only
/// reclaimed by `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab<T> {
    entries: Vec<Option<T>>,
    /// The number of occupied entries
    len: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            len: 0,
        }
    }
}

impl<T> Slab<T> {
    /// Creates an empty slab
    ///
    /// The slab is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty slab with the specified capacity.
    ///
    /// The slab will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the slab will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of entries in the slab that contain values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the slab is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the slab can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns a reference to the value at `ptr`, or `None` if the pointer is null or the entry
    /// is vacant
    #[inline]
    pub fn get(&self, ptr: Ptr) -> Option<&T> {
        self.entries.get(ptr.into_index()?)?.as_ref()
    }

    /// Returns a mutable reference to the value at `ptr`, or `None` if the pointer is null or the
    /// entry is vacant
    #[inline]
    pub fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        self.entries.get_mut(ptr.into_index()?)?.as_mut()
    }

    /// Pushes a value into the slab and returns the pointer at which it was inserted
    pub fn push(&mut self, value: T) -> Ptr {
        let index = self.entries.len();
        // `usize::MAX` is the null pointer, so it can never be a valid index
        let ptr = match Ptr::new(index) {
            Some(ptr) => ptr,
            None => panic!("cannot have more than usize::MAX - 1 entries in slab"),
        };

        self.entries.push(Some(value));
        self.len += 1;

        ptr
    }

    /// Removes the value at `ptr`, leaving the entry vacant
    ///
    /// Returns `None` if the pointer is null or the entry was already vacant. No other entry is
    /// moved or modified.
    pub fn remove(&mut self, ptr: Ptr) -> Option<T> {
        let entry = self.entries.get_mut(ptr.into_index()?)?;
        let value = entry.take()?;
        self.len -= 1;
        Some(value)
    }

    /// Clears the slab, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the slab.
    ///
    /// This invalidates all previous pointers returned from `push`.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }

    /// Reserves capacity for at least `additional` more elements to be inserted in the slab.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional)
    }

    /// Shrinks the capacity of the slab as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptr_api() {
        let ptr = Ptr::new(0).unwrap();
        assert_eq!(ptr.into_index(), Some(0));
        assert!(!ptr.is_null());

        let ptr = Ptr::new(5).unwrap();
        assert_eq!(ptr.into_index(), Some(5));
        assert!(!ptr.is_null());

        assert_eq!(Ptr::new(usize::MAX), None);

        let ptr = Ptr::null();
        assert_eq!(ptr.into_index(), None);
        assert!(ptr.is_null());

        // default to the null ptr
        assert_eq!(Ptr::default(), Ptr::null());
    }

    #[test]
    fn slab_push_get_remove() {
        let mut slab = Slab::new();
        assert!(slab.is_empty());
        assert_eq!(slab.capacity(), 0);

        let first = slab.push(19384);
        let second = slab.push(57);
        assert_eq!(slab.len(), 2);
        assert_eq!(slab.get(first), Some(&19384));
        assert_eq!(slab.get(second), Some(&57));

        *slab.get_mut(second).unwrap() *= -1;
        assert_eq!(slab.get(second), Some(&-57));

        // Removing one entry leaves the other addressable
        assert_eq!(slab.remove(first), Some(19384));
        assert_eq!(slab.len(), 1);
        assert_eq!(slab.get(first), None);
        assert_eq!(slab.get(second), Some(&-57));

        // Vacant and null entries cannot be removed again
        assert_eq!(slab.remove(first), None);
        assert_eq!(slab.remove(Ptr::null()), None);
        assert_eq!(slab.get(Ptr::null()), None);
        assert_eq!(slab.len(), 1);
    }

    #[test]
    fn slab_clear_keeps_capacity() {
        let mut slab: Slab<String> = Slab::with_capacity(10);
        assert!(slab.capacity() >= 10);

        let ptr = slab.push("abc".to_string());
        slab.push("def".to_string());
        let capacity = slab.capacity();

        slab.clear();
        assert!(slab.is_empty());
        assert_eq!(slab.get(ptr), None);
        assert_eq!(slab.capacity(), capacity);

        // pointers are handed out from the start again
        assert_eq!(slab.push("ghi".to_string()), ptr);
        assert_eq!(slab.len(), 1);
    }

    #[test]
    fn drop_removed_and_remaining() {
        use std::sync::Arc;

        let value1 = Arc::new(1);
        let value2 = Arc::new(2);
        let weak_ref1 = Arc::downgrade(&value1);
        let weak_ref2 = Arc::downgrade(&value2);

        let mut slab = Slab::new();
        let ptr1 = slab.push(value1);
        slab.push(value2);

        drop(slab.remove(ptr1));
        assert!(weak_ref1.upgrade().is_none());
        assert_eq!(*weak_ref2.upgrade().unwrap(), 2);

        drop(slab);
        assert!(weak_ref2.upgrade().is_none());
    }

    #[test]
    fn slab_reserve_shrink() {
        let mut slab: Slab<i32> = Slab::new();
        slab.reserve(10);
        assert!(slab.capacity() >= 10);

        slab.push(1);
        slab.shrink_to_fit();
        assert!(slab.capacity() >= slab.len());
        assert_eq!(slab.get(Ptr::new(0).unwrap()), Some(&1));
    }
}
