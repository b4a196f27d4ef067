// This file is part of snapshot-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction parameters for [`Array`](crate::Array) and
//! [`SnapshotArray`](crate::SnapshotArray).

/// Configuration forwarded to the backing array at construction.
///
/// The snapshot layer itself has no knobs; both fields only shape the
/// backing array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayConfig {
    /// Whether removals preserve element order.
    ///
    /// When `false`, removing an element moves the last element into the
    /// hole (O(1)) and inserting moves the displaced element to the end.
    ///
    /// Default: `true`.
    pub ordered: bool,

    /// Number of slots reserved up front.
    ///
    /// Default: 16.
    pub capacity: usize,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Default ordering mode.
    pub const DEFAULT_ORDERED: bool = true;

    /// Creates a config with the default ordering and capacity.
    pub const fn new() -> Self {
        Self {
            ordered: Self::DEFAULT_ORDERED,
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Returns a copy with `ordered` replaced.
    pub const fn with_ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    /// Returns a copy with `capacity` replaced.
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::ArrayConfig;

    #[test]
    fn test_default_is_ordered_with_sixteen_slots() {
        let config = ArrayConfig::default();
        assert!(config.ordered);
        assert_eq!(config.capacity, 16);
        assert_eq!(config, ArrayConfig::new());
    }

    #[test]
    fn test_setters_chain() {
        let config = ArrayConfig::new().with_ordered(false).with_capacity(3);
        assert!(!config.ordered);
        assert_eq!(config.capacity, 3);
    }
}
