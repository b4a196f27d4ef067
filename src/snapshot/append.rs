// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only operations. These never touch an element below the snapshot
//! length, so they run without forking.

// Crate imports
use super::SnapshotArray;
use crate::dynamic::DynamicArray;

impl<T, A: DynamicArray<T>> SnapshotArray<T, A> {
    /// Appends `value` to the end.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.array.push(value);
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.array.reserve(additional);
    }
}

impl<T: Clone, A: DynamicArray<T>> SnapshotArray<T, A> {
    /// Appends clones of every element of `src`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.array.extend_from_slice(src);
    }
}

impl<T, A: DynamicArray<T>> Extend<T> for SnapshotArray<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.array.push(value);
        }
    }
}
