// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::Array;

impl<T> Array<T> {
    /// Appends `value` to the end, growing the buffer if needed.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }
}

impl<T: Clone> Array<T> {
    /// Appends clones of every element of `src`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.items.extend_from_slice(src);
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Array<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
