// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Owned element buffers that can be moved between the active slot, a
//! pending snapshot window and the recycle slot.

// Alloc imports
use alloc::vec::Vec;

/// A contiguous, owned element buffer.
///
/// The live elements of a buffer are exactly [`Storage::as_slice`]; the
/// capacity may be larger. [`Vec<T>`] is the canonical implementation.
pub trait Storage<T> {
    /// Number of elements the buffer can hold without reallocating.
    fn capacity(&self) -> usize;

    /// The live elements.
    fn as_slice(&self) -> &[T];

    /// Drops every live element while keeping the allocation.
    fn scrub(&mut self);

    /// Replaces the contents with clones of `live`.
    ///
    /// Callers check `capacity() >= live.len()` first, so no allocation is
    /// expected.
    fn refill(&mut self, live: &[T])
    where
        T: Clone;
}

impl<T> Storage<T> for Vec<T> {
    #[inline]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    #[inline]
    fn scrub(&mut self) {
        self.clear();
    }

    #[inline]
    fn refill(&mut self, live: &[T])
    where
        T: Clone,
    {
        self.clear();
        self.extend_from_slice(live);
    }
}
