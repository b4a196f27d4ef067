// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::Array, error::Error};

impl<T> Array<T> {
    /// Replaces the element at `index` with `value` and returns the old one.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let slot = self.items.get_mut(index).ok_or(Error::OutOfBounds)?;
        Ok(core::mem::replace(slot, value))
    }
}
