//! Shared, immutable heap storage for values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted storage behind every heap-backed `Value` variant.
///
/// The constructor is `pub(super)`: heap values are only created through the
/// `Value::` factory methods, so every `Text` and `BigNumber` is `Arc`-backed
/// and cloning a `Value` never copies its payload.
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        Heap::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}
