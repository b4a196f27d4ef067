// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Array`](crate::Array) and
//! [`SnapshotArray`](crate::SnapshotArray).
//!
//! - **Serialize**: as a sequence of the current live elements. Snapshot
//!   windows and spare buffers are not part of the serialized form.
//! - **Deserialize**: from any sequence, into an ordered array with no pending
//!   window.

// Crate imports
use crate::{array::Array, dynamic::DynamicArray, snapshot::SnapshotArray};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on the capacity reserved from an untrusted size hint.
const MAX_PREALLOCATED: usize = 4096;

fn serialize_slice<T: Serialize, S: Serializer>(items: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize> Serialize for Array<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

impl<T: Serialize, A: DynamicArray<T>> Serialize for SnapshotArray<T, A> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ArrayVisitor<T> {
    type Value = Array<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
        let mut out = Array::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Array<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor(PhantomData))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SnapshotArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Array::deserialize(d).map(SnapshotArray::wrap)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Array, ArrayConfig, SnapshotArray, WindowState};
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_serde_roundtrip_json() {
        let a = Array::from(vec![1, 2, 3]);
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: Array<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
        assert!(back.is_ordered());
    }

    #[test]
    fn test_serialize_uses_current_contents_mid_window() {
        let mut a = SnapshotArray::from(vec![1, 2, 3]);
        let snap = a.begin();
        a.remove_index(0).unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), "[2,3]");
        assert_eq!(a.view(&snap).unwrap(), &[1, 2, 3]);
        a.end();
    }

    #[test]
    fn test_deserialize_snapshot_array_is_idle() {
        let a: SnapshotArray<u8> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(a.state(), WindowState::Idle);
        assert_eq!(a.as_slice(), &[4, 5]);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let a: Array<i32> = Array::new();
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[]");
        let back: Array<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<Array<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("an array or sequence"), "unexpected error message: {msg}");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ArrayConfig::new().with_ordered(false).with_capacity(4);
        let s = serde_json::to_string(&config).unwrap();
        assert_eq!(s, r#"{"ordered":false,"capacity":4}"#);
        let back: ArrayConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(back, config);
    }
}
