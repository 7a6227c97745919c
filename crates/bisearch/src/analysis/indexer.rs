//! First-occurrence value index over an unsorted backing array.
//!
//! ## Purpose
//!
//! This module maintains a mapping from each distinct value in an
//! unsorted array to the position of its first occurrence, answering
//! lookups in O(log n) without reordering the data.
//!
//! ## Design notes
//!
//! * **Ordered map**: The index is a `BTreeMap`, which is deterministic
//!   and available without `std`.
//! * **Rebuild on replacement**: Replacing the backing array rebuilds the
//!   whole index; stale positions never survive a replacement.
//! * **Sentinel, not error**: Absent values yield `None`.
//!
//! ## Invariants
//!
//! * For every distinct value `v` in the data,
//!   `get(&v) == Some(first position of v)`.
//! * The index always describes the current backing array.
//!
//! ## Non-goals
//!
//! * This module does not deduplicate or sort the backing array.
//! * Mutation is single-writer; concurrent access is the caller's
//!   responsibility.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

// ============================================================================
// Value Index
// ============================================================================

/// Index from distinct value to its first position in the backing array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueIndex<T: Ord + Clone> {
    /// The backing array, in its original order.
    data: Vec<T>,

    /// Map from value to earliest position in `data`.
    first_position: BTreeMap<T, usize>,
}

impl<T: Ord + Clone> ValueIndex<T> {
    /// Build an index over the given data.
    pub fn new(data: Vec<T>) -> Self {
        let first_position = Self::build(&data);
        Self {
            data,
            first_position,
        }
    }

    /// Position of the first occurrence of `element`, or `None` when the
    /// element is absent.
    pub fn get(&self, element: &T) -> Option<usize> {
        self.first_position.get(element).copied()
    }

    /// Replace the backing array and rebuild the index.
    pub fn replace_data(&mut self, data: Vec<T>) {
        self.first_position = Self::build(&data);
        self.data = data;
    }

    /// Number of elements in the backing array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the backing array is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow of the backing array, in its original order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Map every distinct value to its earliest position.
    fn build(data: &[T]) -> BTreeMap<T, usize> {
        let mut first_position = BTreeMap::new();
        for (position, value) in data.iter().enumerate() {
            first_position.entry(value.clone()).or_insert(position);
        }
        first_position
    }
}

impl<T: Ord + Clone> From<Vec<T>> for ValueIndex<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}
