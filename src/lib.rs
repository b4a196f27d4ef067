// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `snapshot-array`
//!
//! A `no_std` (with `alloc`) growable array whose contents can be
//! snapshotted while the array keeps being mutated, **with no `unsafe`**.
//!
//! The core type, [`SnapshotArray<T>`], is meant for lists that are walked
//! while the walk itself may change the list: listener and observer lists,
//! child lists in a scene graph, pending-work queues whose handlers enqueue
//! or cancel work. Iterating a snapshot of such a list is stable without
//! cloning it up front and without reference counting.
//!
//! ## How it works
//!
//! - [`SnapshotArray::begin`] opens a *window* and returns a [`Snapshot`]
//!   token. Nothing is copied.
//! - While the window is open, the first call that could change an element
//!   *forks*: the live elements are cloned into another buffer which becomes
//!   the active one. The snapshotted buffer is parked, untouched.
//! - [`SnapshotArray::view`] resolves the token to the frozen elements, no
//!   matter how the array changed since.
//! - [`SnapshotArray::end`] closes the window. A parked buffer is cleared and
//!   kept as a spare, so the next fork usually reuses it instead of
//!   allocating.
//!
//! Windows that see no mutation cost nothing beyond the bookkeeping.
//! Appending ([`SnapshotArray::push`] and friends) never forks, since it
//! cannot change the snapshotted prefix.
//!
//! ## Single window
//!
//! There is one window slot per array, not a stack. Calling `begin()` while a
//! window is pending closes that window first (recycling its buffer) and its
//! token resolves to [`Error::StaleSnapshot`] from then on.
//!
//! ## Backing array
//!
//! The copy-on-write layer is generic over the [`DynamicArray`] trait. The
//! crate ships [`Array<T>`], a `Vec`-backed implementation that supports an
//! unordered mode (O(1) swap-removal) selected through [`ArrayConfig`].
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for [`Array<T>`],
//!     [`SnapshotArray<T>`] (as a sequence of the current elements) and
//!     [`ArrayConfig`].
//!
//! ## Logging
//!
//! Forks are reported at `trace` level and buffer recycling at `debug`
//! level through the [`log`] facade. Nothing is printed unless the
//! application installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use snapshot_array::SnapshotArray;
//!
//! let mut a = SnapshotArray::from(vec![1, 2, 3]);
//!
//! let snapshot = a.begin();
//! a.set(0, 10).unwrap();
//! a.pop();
//! assert_eq!(a.as_slice(), &[10, 2]);
//! assert_eq!(a.view(&snapshot).unwrap(), &[1, 2, 3]);
//! a.end();
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod array;
mod config;
mod dynamic;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod snapshot;
mod storage;

// Public exports (crate API surface)
pub use array::Array;
pub use config::ArrayConfig;
pub use dynamic::DynamicArray;
pub use error::Error;
pub use snapshot::{Snapshot, SnapshotArray, WindowState};
pub use storage::Storage;
