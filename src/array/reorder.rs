// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::Array;

// External imports - rand
use rand::{seq::SliceRandom, Rng};

impl<T> Array<T> {
    /// Reverses the order of the live elements.
    #[inline]
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Shuffles the live elements with `rng`.
    #[inline]
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.items.shuffle(rng);
    }
}
