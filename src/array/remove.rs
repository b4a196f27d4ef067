// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::Array, error::Error};

impl<T> Array<T> {
    /// Removes and returns the element at `index`.
    ///
    /// - Ordered: the tail shifts one to the left.
    /// - Unordered: the last element moves into the hole.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn remove_index(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.items.len() {
            return Err(Error::OutOfBounds);
        }
        Ok(if self.ordered {
            self.items.remove(index)
        } else {
            self.items.swap_remove(index)
        })
    }

    /// Removes and returns the first element for which `f` returns `true`.
    ///
    /// Identity-based removal is a predicate too, e.g.
    /// `remove_where(|item| Rc::ptr_eq(item, &target))`.
    #[inline]
    pub fn remove_where<F>(&mut self, f: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.items.iter().position(f)?;
        self.remove_index(index).ok()
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    #[inline]
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_where(|item| item == value).is_some()
    }

    /// Retains only the elements specified by the predicate `f`, preserving order.
    #[inline]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(f);
    }
}
