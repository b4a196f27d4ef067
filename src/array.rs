// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Array` type and its inherent API.
//!
//! `Array<T>` is the plain growable sequence that [`SnapshotArray`](crate::SnapshotArray)
//! wraps by default. It owns a single `Vec<T>` buffer and an ordering mode.
//! Methods generally mirror slice/`Vec` semantics; index-based mutators are
//! fallible and return [`Error::OutOfBounds`] instead of panicking.

mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod realloc;
mod remove;
mod reorder;
mod set;
mod sort;
mod swap;
mod truncate;

// Crate imports
use crate::{dynamic::DynamicArray, error::Error};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

// External imports - rand
use rand::Rng;

/// An ordered or unordered growable array.
///
/// `Array<T>` stores its elements in a single heap buffer and tracks whether
/// removals must preserve order:
///
/// - **ordered** (the default): [`remove_index`](Array::remove_index) shifts
///   the tail left and [`insert`](Array::insert) shifts it right, like `Vec`.
/// - **unordered**: [`remove_index`](Array::remove_index) moves the last
///   element into the hole and [`insert`](Array::insert) moves the displaced
///   element to the end. Both are O(1).
///
/// Growth follows `Vec`'s amortized doubling.
///
/// # Examples
///
/// ```rust
/// use snapshot_array::{Array, ArrayConfig};
///
/// let mut a = Array::with_config(ArrayConfig::new().with_ordered(false));
/// a.extend_from_slice(&[1, 2, 3, 4]);
/// assert_eq!(a.remove_index(0), Ok(1));
/// assert_eq!(a.as_slice(), &[4, 2, 3]);
/// ```
#[derive(Clone)]
pub struct Array<T> {
    pub(crate) items: Vec<T>,
    pub(crate) ordered: bool,
}

impl<T> Array<T> {
    /// Returns the current logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity of the active buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns `true` if removals preserve element order.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Returns the live elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns the last element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the index of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    #[inline]
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|item| item == value)
    }

    /// Consumes the array and returns its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("ordered", &self.ordered)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Array<T> {}
impl<T: Ord> Ord for Array<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for Array<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> DynamicArray<T> for Array<T> {
    type Storage = Vec<T>;

    fn len(&self) -> usize {
        Array::len(self)
    }
    fn capacity(&self) -> usize {
        Array::capacity(self)
    }
    fn as_slice(&self) -> &[T] {
        Array::as_slice(self)
    }
    fn as_mut_slice(&mut self) -> &mut [T] {
        Array::as_mut_slice(self)
    }
    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        Array::set(self, index, value)
    }
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        Array::insert(self, index, value)
    }
    fn push(&mut self, value: T) {
        Array::push(self, value)
    }
    fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        Array::extend_from_slice(self, other)
    }
    fn reserve(&mut self, additional: usize) {
        Array::reserve(self, additional)
    }
    fn swap(&mut self, first: usize, second: usize) -> Result<(), Error> {
        Array::swap(self, first, second)
    }
    fn remove_index(&mut self, index: usize) -> Result<T, Error> {
        Array::remove_index(self, index)
    }
    fn remove_where<F>(&mut self, f: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        Array::remove_where(self, f)
    }
    fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        Array::retain(self, f)
    }
    fn pop(&mut self) -> Option<T> {
        Array::pop(self)
    }
    fn clear(&mut self) {
        Array::clear(self)
    }
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Array::sort_by(self, compare)
    }
    fn sort_by_key<K, F>(&mut self, f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Array::sort_by_key(self, f)
    }
    fn reverse(&mut self) {
        Array::reverse(self)
    }
    fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        Array::shuffle(self, rng)
    }
    fn truncate(&mut self, new_len: usize) {
        Array::truncate(self, new_len)
    }
    fn reallocate(&mut self, capacity: usize) -> Vec<T>
    where
        T: Clone,
    {
        Array::reallocate(self, capacity)
    }
    fn replace_storage(&mut self, storage: Vec<T>) -> Vec<T> {
        Array::replace_storage(self, storage)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Array;
    use crate::{ArrayConfig, Error};
    use alloc::vec;

    #[test]
    fn test_default_and_capacity() {
        let a: Array<i32> = Array::default();
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
        assert!(a.is_ordered());
        assert!(a.capacity() >= ArrayConfig::DEFAULT_CAPACITY);

        let b: Array<i32> = Array::with_capacity(3);
        assert!(b.capacity() >= 3);
    }

    #[test]
    fn test_peek_and_index_of() {
        let a = Array::from(vec![7, 8, 7, 9]);
        assert_eq!(a.peek(), Some(&9));
        assert_eq!(a.index_of(&7), Some(0));
        assert_eq!(a.last_index_of(&7), Some(2));
        assert_eq!(a.index_of(&1), None);
        assert!(a.contains(&8));
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut a = Array::from(vec![1, 2]);
        let s: &[i32] = &a;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut a;
        smut[1] = 22;
        assert_eq!(a.as_slice(), &[1, 22]);
        let aref: &[i32] = a.as_ref();
        assert_eq!(aref, &[1, 22]);
        let amut: &mut [i32] = a.as_mut();
        amut[0] = 11;
        assert_eq!(a.into_vec(), vec![11, 22]);
    }

    #[test]
    fn test_eq_ord_hash_via_slice() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a = Array::from(vec![1, 2, 3]);
        let b = Array::from_vec(false, vec![1, 2, 3]);
        let c = Array::from(vec![1, 2, 4]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_borrow_as_slice_key() {
        use core::borrow::{Borrow, BorrowMut};
        use std::collections::HashSet;

        let mut a = Array::from(vec![1, 2]);
        let borrowed: &[i32] = a.borrow();
        assert_eq!(borrowed, &[1, 2]);
        let borrowed_mut: &mut [i32] = a.borrow_mut();
        borrowed_mut[0] = 5;

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&[5, 2][..]));
    }

    #[test]
    fn test_debug_structure() {
        use alloc::format;
        let a = Array::from(vec![1, 2]);
        let dbg = format!("{a:?}");
        assert!(dbg.contains("Array"));
        assert!(dbg.contains("ordered: true"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_dynamic_array_sort_by_key_delegates() {
        use crate::DynamicArray;
        let mut a = Array::from(vec![(2, 'x'), (1, 'y'), (2, 'w')]);
        DynamicArray::sort_by_key(&mut a, |pair: &(i32, char)| pair.0);
        assert_eq!(a.as_slice(), &[(1, 'y'), (2, 'x'), (2, 'w')]);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = Array::from(vec![1, 2, 3]);
        let mut b = a.clone();
        b.set(0, 10).unwrap();
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[10, 2, 3]);
        assert_eq!(b.set(3, 0), Err(Error::OutOfBounds));
    }
}
