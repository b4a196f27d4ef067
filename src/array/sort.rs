// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::Array;

// Core imports
use core::cmp::Ordering;

impl<T> Array<T> {
    /// Sorts by the natural order of `T`. Stable.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.items.sort();
    }

    /// Sorts with the comparator `compare`. Stable.
    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    /// Sorts by the key extracted with `f`. Stable.
    #[inline]
    pub fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.sort_by_key(f);
    }
}
