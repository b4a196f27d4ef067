// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::Array;

// Alloc imports
use alloc::vec::Vec;

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(true, items)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec(true, Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(src: &[T]) -> Self {
        Self::from_vec(true, src.to_vec())
    }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(array: Array<T>) -> Self {
        array.into_vec()
    }
}
