// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::Array, error::Error};

impl<T> Array<T> {
    /// Swaps the elements at `first` and `second`.
    ///
    /// Returns [`Error::OutOfBounds`] if either index is `>= len`.
    #[inline]
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), Error> {
        let len = self.items.len();
        if first >= len || second >= len {
            return Err(Error::OutOfBounds);
        }
        self.items.swap(first, second);
        Ok(())
    }
}
