// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::Array;

impl<T> Array<T> {
    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Removed elements are dropped; capacity is kept.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.items.truncate(new_len);
    }

    /// Removes every element, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
