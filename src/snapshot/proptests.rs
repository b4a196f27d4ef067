// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Randomized checks: snapshots stay frozen and the live contents track a
//! plain `Vec` model, across many windows sharing the recycled buffer.

// Imports
use crate::{SnapshotArray, WindowState};
use alloc::vec::Vec;
use proptest::prelude::*;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Insert(usize, i32),
    Swap(usize, usize),
    RemoveValue(i32),
    RemoveIndex(usize),
    Pop,
    Clear,
    Sort,
    SortDescending,
    Reverse,
    Shuffle(u64),
    Truncate(usize),
    Push(i32),
    RetainEven,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Small values and indices so that lookups hit as often as they miss.
    let index = 0usize..12;
    let value = -4i32..4;
    prop_oneof![
        (index.clone(), value.clone()).prop_map(|(i, v)| Op::Set(i, v)),
        (index.clone(), value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
        (index.clone(), index.clone()).prop_map(|(i, j)| Op::Swap(i, j)),
        value.clone().prop_map(Op::RemoveValue),
        index.clone().prop_map(Op::RemoveIndex),
        Just(Op::Pop),
        Just(Op::Clear),
        Just(Op::Sort),
        Just(Op::SortDescending),
        Just(Op::Reverse),
        any::<u64>().prop_map(Op::Shuffle),
        index.clone().prop_map(Op::Truncate),
        value.prop_map(Op::Push),
        Just(Op::RetainEven),
    ]
}

/// Applies `op` to the array and to the `Vec` model.
fn apply(array: &mut SnapshotArray<i32>, model: &mut Vec<i32>, op: &Op) {
    match *op {
        Op::Set(i, v) => {
            let result = array.set(i, v);
            if i < model.len() {
                assert_eq!(result, Ok(model[i]));
                model[i] = v;
            } else {
                assert!(result.is_err());
            }
        }
        Op::Insert(i, v) => {
            let result = array.insert(i, v);
            if i <= model.len() {
                assert!(result.is_ok());
                model.insert(i, v);
            } else {
                assert!(result.is_err());
            }
        }
        Op::Swap(i, j) => {
            let result = array.swap(i, j);
            if i < model.len() && j < model.len() {
                assert!(result.is_ok());
                model.swap(i, j);
            } else {
                assert!(result.is_err());
            }
        }
        Op::RemoveValue(v) => {
            let found = array.remove_value(&v);
            match model.iter().position(|x| *x == v) {
                Some(i) => {
                    assert!(found);
                    model.remove(i);
                }
                None => assert!(!found),
            }
        }
        Op::RemoveIndex(i) => {
            let result = array.remove_index(i);
            if i < model.len() {
                assert_eq!(result, Ok(model.remove(i)));
            } else {
                assert!(result.is_err());
            }
        }
        Op::Pop => assert_eq!(array.pop(), model.pop()),
        Op::Clear => {
            array.clear();
            model.clear();
        }
        Op::Sort => {
            array.sort();
            model.sort();
        }
        Op::SortDescending => {
            array.sort_by(|a, b| b.cmp(a));
            model.sort_by(|a, b| b.cmp(a));
        }
        Op::Reverse => {
            array.reverse();
            model.reverse();
        }
        Op::Shuffle(seed) => {
            array.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
            model.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        }
        Op::Truncate(n) => {
            array.truncate(n);
            model.truncate(n);
        }
        Op::Push(v) => {
            array.push(v);
            model.push(v);
        }
        Op::RetainEven => {
            array.retain(|x| x % 2 == 0);
            model.retain(|x| x % 2 == 0);
        }
    }
}

proptest! {
    #[test]
    fn snapshot_view_is_frozen_for_the_whole_window(
        initial in proptest::collection::vec(-4i32..4, 0..10),
        ops in proptest::collection::vec(op_strategy(), 0..24),
    ) {
        let mut array = SnapshotArray::from(initial.clone());
        let mut model = initial.clone();

        let snapshot = array.begin();
        prop_assert_eq!(snapshot.len(), initial.len());
        for op in &ops {
            apply(&mut array, &mut model, op);
            prop_assert_eq!(array.view(&snapshot).unwrap(), &initial[..]);
            prop_assert_eq!(array.as_slice(), &model[..]);
        }
        array.end();
        prop_assert_eq!(array.state(), WindowState::Idle);
        prop_assert_eq!(array.as_slice(), &model[..]);
    }

    #[test]
    fn consecutive_windows_share_recycled_buffers(
        initial in proptest::collection::vec(-4i32..4, 0..10),
        windows in proptest::collection::vec(
            proptest::collection::vec(op_strategy(), 0..6),
            1..8,
        ),
    ) {
        let mut array = SnapshotArray::from(initial.clone());
        let mut model = initial;

        for ops in &windows {
            let frozen = model.clone();
            let snapshot = array.begin();
            for op in ops {
                apply(&mut array, &mut model, op);
                prop_assert_eq!(array.view(&snapshot).unwrap(), &frozen[..]);
            }
            array.end();
            prop_assert!(array.view(&snapshot).is_err());
            prop_assert_eq!(array.as_slice(), &model[..]);
        }
    }

    #[test]
    fn mutations_outside_windows_never_fork(
        initial in proptest::collection::vec(-4i32..4, 1..10),
        ops in proptest::collection::vec(op_strategy(), 0..24),
    ) {
        let mut array = SnapshotArray::from(initial.clone());
        let mut model = initial;
        for op in &ops {
            apply(&mut array, &mut model, op);
        }
        prop_assert_eq!(array.state(), WindowState::Idle);
        prop_assert_eq!(array.recycled_capacity(), None);
        prop_assert_eq!(array.as_slice(), &model[..]);
    }
}
