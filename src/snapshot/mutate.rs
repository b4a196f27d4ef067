// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mutating operations. Each one runs the fork check before delegating to
//! the backing array.

// Crate imports
use super::{SnapshotArray, Window};
use crate::{dynamic::DynamicArray, error::Error, storage::Storage};

// Core imports
use core::cmp::Ordering;

// External imports - log
use log::trace;

// External imports - rand
use rand::Rng;

impl<T: Clone, A: DynamicArray<T>> SnapshotArray<T, A> {
    /// Forks the active buffer if a window still aliases it.
    ///
    /// The spare is reused when it can hold every live element; otherwise a
    /// buffer of the current capacity is allocated and the spare is kept.
    fn before_mutate(&mut self) {
        let (epoch, len) = match self.window {
            Window::Snapshotting { epoch, len } => (epoch, len),
            Window::Idle | Window::Forked { .. } => return,
        };
        let live = self.array.len();
        let displaced = match self.recycled.take() {
            Some(mut spare) if spare.capacity() >= live => {
                trace!(
                    "snapshot fork: reusing spare buffer (capacity {}, {live} live)",
                    spare.capacity()
                );
                spare.refill(self.array.as_slice());
                self.array.replace_storage(spare)
            }
            spare => {
                self.recycled = spare;
                let capacity = self.array.capacity();
                trace!("snapshot fork: allocating buffer (capacity {capacity}, {live} live)");
                self.array.reallocate(capacity)
            }
        };
        self.window = Window::Forked {
            epoch,
            len,
            displaced,
        };
    }

    /// Replaces the element at `index` and returns the old one.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.before_mutate();
        self.array.set(index, value)
    }

    /// Inserts `value` at `index` (`index <= len`).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.before_mutate();
        self.array.insert(index, value)
    }

    /// Swaps the elements at `first` and `second`.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), Error> {
        self.before_mutate();
        self.array.swap(first, second)
    }

    /// Removes and returns the element at `index`.
    pub fn remove_index(&mut self, index: usize) -> Result<T, Error> {
        self.before_mutate();
        self.array.remove_index(index)
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.before_mutate();
        self.array.remove_value(value)
    }

    /// Removes and returns the first element matching `f`.
    pub fn remove_where<F>(&mut self, f: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.before_mutate();
        self.array.remove_where(f)
    }

    /// Keeps only the elements matching `f`.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.before_mutate();
        self.array.retain(f);
    }

    /// Removes and returns the last element, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.before_mutate();
        self.array.pop()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.before_mutate();
        self.array.clear();
    }

    /// Sorts by the natural order of `T`. Stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.before_mutate();
        self.array.sort();
    }

    /// Sorts with the comparator `compare`. Stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.before_mutate();
        self.array.sort_by(compare);
    }

    /// Sorts by the key extracted with `f`. Stable.
    pub fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.before_mutate();
        self.array.sort_by_key(f);
    }

    /// Reverses the element order.
    pub fn reverse(&mut self) {
        self.before_mutate();
        self.array.reverse();
    }

    /// Shuffles the elements with `rng`.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.before_mutate();
        self.array.shuffle(rng);
    }

    /// Shortens to `new_len` elements. No-op on the contents if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        self.before_mutate();
        self.array.truncate(new_len);
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Forks even when `index` is out of range, like every other mutator.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.before_mutate();
        self.array.as_mut_slice().get_mut(index)
    }

    /// Returns the current contents mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.before_mutate();
        self.array.as_mut_slice()
    }
}
