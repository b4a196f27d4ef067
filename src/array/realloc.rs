// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::Array;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::mem;

impl<T> Array<T> {
    /// Installs `storage` as the backing buffer and returns the previous one.
    ///
    /// The elements of `storage` become the live elements of the array.
    #[inline]
    pub fn replace_storage(&mut self, storage: Vec<T>) -> Vec<T> {
        mem::replace(&mut self.items, storage)
    }
}

impl<T: Clone> Array<T> {
    /// Moves the live elements into a fresh buffer of at least `capacity`
    /// slots (never less than `len`) and returns the previous buffer.
    ///
    /// The returned buffer still holds the original elements; the array
    /// continues with clones of them.
    #[inline]
    pub fn reallocate(&mut self, capacity: usize) -> Vec<T> {
        let mut fresh = Vec::with_capacity(capacity.max(self.items.len()));
        fresh.extend_from_slice(&self.items);
        mem::replace(&mut self.items, fresh)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Array;
    use alloc::vec;

    #[test]
    fn test_reallocate_returns_previous_buffer() {
        let mut a = Array::from(vec![1, 2, 3]);
        let before = a.as_ptr();
        let old = a.reallocate(8);
        assert_eq!(old.as_ptr(), before);
        assert_eq!(old, [1, 2, 3]);
        assert_ne!(a.as_ptr(), before);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert!(a.capacity() >= 8);
    }

    #[test]
    fn test_reallocate_never_shrinks_below_len() {
        let mut a = Array::from(vec![1, 2, 3]);
        let _ = a.reallocate(0);
        assert!(a.capacity() >= 3);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_replace_storage() {
        let mut a = Array::from(vec![1, 2]);
        let old = a.replace_storage(vec![7, 8, 9]);
        assert_eq!(old, [1, 2]);
        assert_eq!(a.as_slice(), &[7, 8, 9]);
    }
}
