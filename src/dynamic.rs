// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The backing-array capability wrapped by [`SnapshotArray`](crate::SnapshotArray).
//!
//! [`DynamicArray`] describes an ordered, growable sequence that owns exactly
//! one [`Storage`] buffer at a time. The snapshot layer never reaches into the
//! buffer itself: it reads through [`DynamicArray::as_slice`], forks with
//! [`DynamicArray::reallocate`] or [`DynamicArray::replace_storage`], and
//! forwards every other call unchanged.
//!
//! [`Array`](crate::Array) is the implementation shipped with this crate.

// Crate imports
use crate::{error::Error, storage::Storage};

// Core imports
use core::cmp::Ordering;

// External imports - rand
use rand::Rng;

/// An ordered, growable sequence backed by a single owned buffer.
///
/// # Contract
///
/// - [`as_slice`](Self::as_slice) returns the live elements of the active
///   buffer, in order.
/// - [`push`](Self::push), [`extend_from_slice`](Self::extend_from_slice) and
///   [`reserve`](Self::reserve) never change an existing element and never
///   reorder; they may move the active buffer to a larger allocation.
/// - Every other `&mut self` method may change any live element.
/// - Failing calls leave the live elements unchanged.
pub trait DynamicArray<T> {
    /// The buffer type this array stores its elements in.
    type Storage: Storage<T>;

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of the active buffer.
    fn capacity(&self) -> usize;

    /// The live elements.
    fn as_slice(&self) -> &[T];

    /// The live elements, mutably.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Replaces the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, value: T) -> Result<T, Error>;

    /// Inserts `value` at `index` (`index <= len`).
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error>;

    /// Appends `value`.
    fn push(&mut self, value: T);

    /// Appends clones of every element of `other`.
    fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        for value in other {
            self.push(value.clone());
        }
    }

    /// Reserves room for at least `additional` more elements.
    fn reserve(&mut self, additional: usize);

    /// Swaps the elements at `first` and `second`.
    fn swap(&mut self, first: usize, second: usize) -> Result<(), Error>;

    /// Removes and returns the element at `index`.
    fn remove_index(&mut self, index: usize) -> Result<T, Error>;

    /// Removes and returns the first element matching `f`.
    fn remove_where<F>(&mut self, f: F) -> Option<T>
    where
        F: FnMut(&T) -> bool;

    /// Removes the first element equal to `value`. Returns whether one was found.
    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_where(|item| item == value).is_some()
    }

    /// Keeps only the elements matching `f`.
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool;

    /// Removes and returns the last element.
    fn pop(&mut self) -> Option<T>;

    /// Removes every element.
    fn clear(&mut self);

    /// Sorts with `compare`. Stable.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts by the natural order of `T`. Stable.
    fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Reverses the element order.
    /// Sorts by the key extracted with `f`. Stable.
    fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K;

    fn reverse(&mut self);

    /// Shuffles the elements using `rng`.
    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized;

    /// Shortens to `new_len` elements. No-op if `new_len >= len`.
    fn truncate(&mut self, new_len: usize);

    /// Installs a fresh buffer of at least `capacity` slots holding clones of
    /// the live elements, and returns the previous buffer untouched.
    fn reallocate(&mut self, capacity: usize) -> Self::Storage
    where
        T: Clone;

    /// Installs `storage` as the active buffer and returns the previous one.
    ///
    /// The live elements of `storage` become the live elements of the array.
    fn replace_storage(&mut self, storage: Self::Storage) -> Self::Storage;
}
