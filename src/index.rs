// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Array`](crate::Array) and
//! [`SnapshotArray`](crate::SnapshotArray).
//!
//! Indexing mirrors slice behavior:
//! - panics on out-of-bounds and inverted ranges;
//! - supports every `SliceIndex` form (`usize` and all range types);
//! - views are restricted to the live elements.
//!
//! `SnapshotArray` only implements `Index`. Writes go through its forking
//! mutators ([`SnapshotArray::get_mut`](crate::SnapshotArray::get_mut),
//! [`SnapshotArray::as_mut_slice`](crate::SnapshotArray::as_mut_slice)).

// Crate imports
use crate::{array::Array, dynamic::DynamicArray, snapshot::SnapshotArray};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for Array<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Array<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, A: DynamicArray<T>, I: SliceIndex<[T]>> Index<I> for SnapshotArray<T, A> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}
