// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `Array` and `SnapshotArray`.
//!
//! These errors represent bounds conditions raised by the backing array and
//! snapshot tokens that no longer belong to the pending window.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`Array`](crate::Array) and
/// [`SnapshotArray`](crate::SnapshotArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
    /// A [`Snapshot`](crate::Snapshot) token was resolved after its window was
    /// released or replaced by a later `begin()`.
    StaleSnapshot,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::StaleSnapshot => f.write_str("snapshot is no longer pending"),
        }
    }
}

impl CoreError for Error {}
