// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Array`](crate::Array) and
//! [`SnapshotArray`](crate::SnapshotArray).
//!
//! - Owned iteration yields elements by value (backed by `alloc::vec::IntoIter`).
//! - `&Array`, `&mut Array` and `&SnapshotArray` iterate as slices.
//! - There is no `&mut SnapshotArray` iterator; use
//!   [`SnapshotArray::as_mut_slice`](crate::SnapshotArray::as_mut_slice),
//!   which forks first.

// Crate imports
use crate::{array::Array, dynamic::DynamicArray, snapshot::SnapshotArray};

// Alloc imports
use alloc::vec::{IntoIter, Vec};

// Core imports
use core::slice;

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for SnapshotArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T, A: DynamicArray<T>> IntoIterator for &'a SnapshotArray<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T> FromIterator<T> for SnapshotArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::wrap(iter.into_iter().collect())
    }
}
