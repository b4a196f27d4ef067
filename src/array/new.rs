// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::Array, config::ArrayConfig};

// Alloc imports
use alloc::vec::Vec;

impl<T> Array<T> {
    /// Constructs an empty, ordered array with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    /// Constructs an empty, ordered array with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ArrayConfig::new().with_capacity(capacity))
    }

    /// Constructs an empty array from `config`.
    #[inline]
    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.capacity),
            ordered: config.ordered,
        }
    }

    /// Adopts `items` as the backing buffer.
    ///
    /// The capacity of `items` is kept as is.
    #[inline]
    pub fn from_vec(ordered: bool, items: Vec<T>) -> Self {
        Self { items, ordered }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}
