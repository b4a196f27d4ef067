// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `SnapshotArray` type: copy-on-write snapshot windows over a
//! [`DynamicArray`].
//!
//! A window is opened with [`SnapshotArray::begin`] and closed with
//! [`SnapshotArray::end`]. While it is open, the elements `[0, len)` seen
//! through [`SnapshotArray::view`] never change, even if the array itself is
//! mutated in between (for example by a callback invoked from the loop that
//! walks the snapshot).
//!
//! The first mutation inside a window *forks*: the live elements are cloned
//! into another buffer, which becomes the active one, and the old buffer is
//! parked in the window untouched. Closing the window scrubs the parked
//! buffer and keeps it as a spare, so the next fork usually allocates
//! nothing.
//!
//! ```text
//!            begin()               first mutation
//!   Idle ───────────────▶ Snapshotting ─────────────▶ Forked
//!    ▲                        │                          │
//!    └──────── end() ─────────┴───────── end() ──────────┘
//!                                  (parked buffer → spare)
//! ```

mod append;
mod mutate;
#[cfg(test)]
mod proptests;

// Crate imports
use crate::{
    array::Array, config::ArrayConfig, dynamic::DynamicArray, error::Error, storage::Storage,
};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    fmt,
    marker::PhantomData,
    mem,
    ops::Deref,
    sync::atomic::{AtomicU64, Ordering},
};

// External imports - log
use log::debug;

/// Source of window epochs, shared by every array so that a token never
/// matches a window of another array.
static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

/// Token for a pending snapshot window, returned by [`SnapshotArray::begin`].
///
/// The token does not borrow the array; it is resolved with
/// [`SnapshotArray::view`]. It only resolves against the array that issued
/// it, and only until the window is closed or replaced by another `begin()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Snapshot {
    epoch: u64,
    len: usize,
}

impl Snapshot {
    /// Logical length of the array when the window was opened.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array was empty when the window was opened.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Observable state of the snapshot window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowState {
    /// No window is open.
    Idle,
    /// A window is open and the active buffer is still the snapshotted one.
    Snapshotting,
    /// A window is open and a mutation has moved the array to another buffer.
    Forked,
}

/// Pending window. A forked window owns the buffer it displaced.
enum Window<S> {
    Idle,
    Snapshotting { epoch: u64, len: usize },
    Forked { epoch: u64, len: usize, displaced: S },
}

/// A growable array whose contents can be snapshotted while it keeps being
/// mutated.
///
/// `SnapshotArray<T, A>` wraps a backing [`DynamicArray`] (by default
/// [`Array<T>`]) and intercepts every mutating call. Outside a snapshot
/// window mutations go straight through. Inside a window the first mutation
/// forks the buffer, so the snapshot keeps seeing the contents it had at
/// [`begin`](SnapshotArray::begin).
///
/// # Snapshot windows
///
/// - [`begin`](SnapshotArray::begin) opens a window and returns a
///   [`Snapshot`] token carrying the length at that moment. Nothing is copied.
/// - [`view`](SnapshotArray::view) resolves the token to the frozen elements.
/// - [`end`](SnapshotArray::end) closes the window. Without a pending window
///   it does nothing.
///
/// There is a single window slot. Calling `begin()` while a window is pending
/// closes the old window first; its token then resolves to
/// [`Error::StaleSnapshot`].
///
/// # What forks
///
/// Every operation that can change an element at an index below the snapshot
/// length forks: [`set`](SnapshotArray::set), [`insert`](SnapshotArray::insert),
/// [`swap`](SnapshotArray::swap), the `remove_*` family, [`pop`](SnapshotArray::pop),
/// [`clear`](SnapshotArray::clear), the `sort*` family, [`reverse`](SnapshotArray::reverse),
/// [`shuffle`](SnapshotArray::shuffle), [`truncate`](SnapshotArray::truncate),
/// [`retain`](SnapshotArray::retain), [`get_mut`](SnapshotArray::get_mut) and
/// [`as_mut_slice`](SnapshotArray::as_mut_slice). Appending
/// ([`push`](SnapshotArray::push), [`extend_from_slice`](SnapshotArray::extend_from_slice),
/// [`Extend`]) and [`reserve`](SnapshotArray::reserve) never fork.
///
/// Forking clones the live elements, so mutators require `T: Clone`. For
/// expensive elements store `Rc<T>`.
///
/// # Threading
///
/// All access happens through `&self`/`&mut self`; the window only protects
/// against reentrant mutation on the same thread of control.
///
/// # Examples
///
/// ```rust
/// use snapshot_array::SnapshotArray;
///
/// let mut listeners = SnapshotArray::from(vec!["a", "b", "c"]);
///
/// let snapshot = listeners.begin();
/// for i in 0..snapshot.len() {
///     let name = listeners.view(&snapshot).unwrap()[i];
///     if name == "a" {
///         // A callback removing entries while the loop runs.
///         listeners.remove_value(&"b");
///     }
/// }
/// listeners.end();
///
/// assert_eq!(listeners.as_slice(), &["a", "c"]);
/// ```
pub struct SnapshotArray<T, A = Array<T>>
where
    A: DynamicArray<T>,
{
    array: A,
    window: Window<A::Storage>,
    recycled: Option<A::Storage>,
    _marker: PhantomData<T>,
}

impl<T> SnapshotArray<T> {
    /// Constructs an empty, ordered array with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::wrap(Array::new())
    }

    /// Constructs an empty, ordered array with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::wrap(Array::with_capacity(capacity))
    }

    /// Constructs an empty array from `config`.
    #[inline]
    pub fn with_config(config: ArrayConfig) -> Self {
        Self::wrap(Array::with_config(config))
    }

    /// Adopts `items` as the initial contents.
    #[inline]
    pub fn from_vec(ordered: bool, items: Vec<T>) -> Self {
        Self::wrap(Array::from_vec(ordered, items))
    }
}

impl<T, A: DynamicArray<T>> SnapshotArray<T, A> {
    /// Wraps an existing backing array. No window is pending.
    #[inline]
    pub fn wrap(array: A) -> Self {
        Self {
            array,
            window: Window::Idle,
            recycled: None,
            _marker: PhantomData,
        }
    }

    /// Opens a snapshot window over the current contents.
    ///
    /// Nothing is copied here; a copy happens on the first mutation before
    /// [`end`](Self::end). If a window is already pending it is closed first
    /// and its token becomes stale.
    pub fn begin(&mut self) -> Snapshot {
        if let Window::Snapshotting { epoch, .. } | Window::Forked { epoch, .. } = self.window {
            debug!("snapshot begin: replacing pending window {epoch}");
            self.end();
        }
        let epoch = NEXT_EPOCH.fetch_add(1, Ordering::Relaxed);
        let len = self.array.len();
        self.window = Window::Snapshotting { epoch, len };
        Snapshot { epoch, len }
    }

    /// Closes the pending window, if any.
    ///
    /// If the window forked, the displaced buffer is scrubbed (its elements
    /// are dropped) and kept as the spare for the next fork, replacing any
    /// previous spare.
    pub fn end(&mut self) {
        if let Window::Forked { mut displaced, .. } = mem::replace(&mut self.window, Window::Idle)
        {
            displaced.scrub();
            debug!(
                "snapshot end: recycling displaced buffer (capacity {})",
                displaced.capacity()
            );
            self.recycled = Some(displaced);
        }
    }

    /// Resolves `snapshot` to the elements it froze.
    ///
    /// Returns [`Error::StaleSnapshot`] if `snapshot` is not the pending window.
    pub fn view(&self, snapshot: &Snapshot) -> Result<&[T], Error> {
        match &self.window {
            Window::Snapshotting { epoch, len } if *epoch == snapshot.epoch => {
                Ok(&self.array.as_slice()[..*len])
            }
            Window::Forked {
                epoch,
                len,
                displaced,
            } if *epoch == snapshot.epoch => Ok(&displaced.as_slice()[..*len]),
            _ => Err(Error::StaleSnapshot),
        }
    }

    /// Returns `true` if `snapshot` is the pending window.
    #[inline]
    pub fn is_pending(&self, snapshot: &Snapshot) -> bool {
        match self.window {
            Window::Idle => false,
            Window::Snapshotting { epoch, .. } | Window::Forked { epoch, .. } => {
                epoch == snapshot.epoch
            }
        }
    }

    /// Returns the state of the window slot.
    #[inline]
    pub fn state(&self) -> WindowState {
        match self.window {
            Window::Idle => WindowState::Idle,
            Window::Snapshotting { .. } => WindowState::Snapshotting,
            Window::Forked { .. } => WindowState::Forked,
        }
    }

    /// Capacity of the spare buffer kept for the next fork, if any.
    #[inline]
    pub fn recycled_capacity(&self) -> Option<usize> {
        self.recycled.as_ref().map(|spare| spare.capacity())
    }

    /// Returns the current logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Returns the capacity of the active buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.array.capacity()
    }

    /// Returns the current contents.
    ///
    /// This always reflects the latest mutations; use [`view`](Self::view) for
    /// the snapshotted contents.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.array.as_slice()
    }

    /// Returns the index of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|item| item == value)
    }

    /// Returns the backing array.
    #[inline]
    pub fn as_array(&self) -> &A {
        &self.array
    }

    /// Consumes the wrapper and returns the backing array.
    ///
    /// Any pending window and spare buffer are dropped.
    #[inline]
    pub fn into_inner(self) -> A {
        self.array
    }

    /// Calls `f` with every element of a snapshot of the current contents.
    ///
    /// `f` receives the array itself and may mutate it freely; the elements
    /// handed out are the ones present when iteration started. Elements are
    /// cloned out of the snapshot one at a time.
    ///
    /// The window is closed afterwards.
    ///
    /// There is a single window slot, so if `f` closes or replaces the window
    /// (for example by calling `for_each` again) the remaining elements can
    /// no longer be reached. Iteration then stops and
    /// [`Error::StaleSnapshot`] is returned.
    ///
    /// ```rust
    /// use snapshot_array::SnapshotArray;
    ///
    /// let mut a = SnapshotArray::from(vec![1, 2, 3]);
    /// let mut seen = Vec::new();
    /// a.for_each(|a, item| {
    ///     seen.push(item);
    ///     a.push(item * 10);
    /// })
    /// .unwrap();
    /// assert_eq!(seen, [1, 2, 3]);
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 10, 20, 30]);
    /// ```
    pub fn for_each<F>(&mut self, mut f: F) -> Result<(), Error>
    where
        T: Clone,
        F: FnMut(&mut Self, T),
    {
        let snapshot = self.begin();
        for index in 0..snapshot.len() {
            let item = match self.view(&snapshot) {
                Ok(items) => items[index].clone(),
                Err(err) => {
                    debug!(
                        "snapshot for_each: window closed by callback, {} of {} elements skipped",
                        snapshot.len() - index,
                        snapshot.len()
                    );
                    return Err(err);
                }
            };
            f(self, item);
        }
        if self.is_pending(&snapshot) {
            self.end();
        }
        Ok(())
    }
}

impl<T> Default for SnapshotArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SnapshotArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::wrap(Array::from(items))
    }
}

impl<T, const N: usize> From<[T; N]> for SnapshotArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::wrap(Array::from(items))
    }
}

impl<T> From<Array<T>> for SnapshotArray<T> {
    fn from(array: Array<T>) -> Self {
        Self::wrap(array)
    }
}

impl<T, A: DynamicArray<T> + Clone> Clone for SnapshotArray<T, A> {
    /// Clones the current contents. The clone starts with no pending window
    /// and no spare buffer.
    fn clone(&self) -> Self {
        Self::wrap(self.array.clone())
    }
}

impl<T: fmt::Debug, A: DynamicArray<T>> fmt::Debug for SnapshotArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotArray")
            .field("state", &self.state())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, A: DynamicArray<T>> PartialEq for SnapshotArray<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, A: DynamicArray<T>> Eq for SnapshotArray<T, A> {}

impl<T, A: DynamicArray<T>> Deref for SnapshotArray<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: DynamicArray<T>> AsRef<[T]> for SnapshotArray<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
