// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::Array, error::Error};

impl<T> Array<T> {
    /// Inserts `value` at `index`.
    ///
    /// - Ordered: elements at `index..` shift one to the right.
    /// - Unordered: the element previously at `index` moves to the end.
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.items.len();
        if index > len {
            return Err(Error::OutOfBounds);
        }
        if self.ordered {
            self.items.insert(index, value);
        } else {
            self.items.push(value);
            self.items.swap(index, len);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Array, Error};
    use alloc::vec;

    #[test]
    fn test_insert_at_bounds_and_shift_correctly() {
        let mut a: Array<i32> = Array::new();
        a.insert(0, 1).unwrap(); // insert at front into empty
        a.insert(1, 3).unwrap(); // tail
        a.insert(1, 2).unwrap(); // middle, shifts right
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        a.insert(3, 4).unwrap(); // exactly at len
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_unordered_insert_moves_displaced_to_end() {
        let mut a = Array::from_vec(false, vec![1, 2, 3]);
        a.insert(0, 9).unwrap();
        assert_eq!(a.as_slice(), &[9, 2, 3, 1]);
        a.insert(4, 5).unwrap();
        assert_eq!(a.as_slice(), &[9, 2, 3, 1, 5]);
    }

    #[test]
    fn test_insert_err_is_noop() {
        let mut a = Array::from(vec![10, 20]);
        assert_eq!(a.insert(3, 99), Err(Error::OutOfBounds));
        assert_eq!(a.as_slice(), &[10, 20]);
    }
}
