// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::Array;

impl<T> Array<T> {
    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}
