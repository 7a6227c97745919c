//! Minimal reorder-span detection over prioritized tasks.
//!
//! ## Purpose
//!
//! This module finds the smallest contiguous index range whose reordering
//! could make a sequence of priorities monotonic, in either direction.
//!
//! ## Design notes
//!
//! * **Per-direction scans**: Each target direction is scanned
//!   independently with [`unsorted_segment`]; the shorter candidate span
//!   wins.
//! * **Fixed tie-break**: On an exact length tie the ascending span is
//!   returned. Callers depend on this being stable across versions.
//! * **Strict violations**: Disorder is detected with strict comparisons;
//!   equal neighbors violate neither direction.
//!
//! ## Invariants
//!
//! * `None` is returned exactly when the priorities are already monotone
//!   (non-strictly) in at least one direction, including every sequence
//!   of length <= 1.
//! * O(n) total: two passes per direction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::search::scan::{Direction, unsorted_segment};

// ============================================================================
// Task
// ============================================================================

/// A named task with an integer priority.
///
/// Immutable after construction; ordering among tasks is defined solely
/// by priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task name.
    name: String,

    /// Task priority; higher runs earlier.
    priority: i64,
}

impl Task {
    /// Create a task with the given name and priority.
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }

    /// Task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Task priority.
    pub fn priority(&self) -> i64 {
        self.priority
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Task({}, {})", self.name, self.priority)
    }
}

// ============================================================================
// Reorder Span
// ============================================================================

/// Minimal span whose reordering could make `values` monotonic.
///
/// Scans both target directions; when both report a span the shorter one
/// is returned, with ties resolved toward the ascending candidate.
/// Returns `None` when the values are already monotone in either
/// direction.
pub fn disorder_span<T: PartialOrd>(values: &[T]) -> Option<(usize, usize)> {
    let ascending = unsorted_segment(values, Direction::Ascending);
    let descending = unsorted_segment(values, Direction::Descending);

    match (ascending, descending) {
        (None, _) | (_, None) => None,
        (Some(asc), Some(desc)) => {
            let asc_len = asc.1 - asc.0;
            let desc_len = desc.1 - desc.0;
            // Ties go to the ascending candidate.
            if desc_len < asc_len { Some(desc) } else { Some(asc) }
        }
    }
}

/// Minimal span whose reordering could sort `tasks` by priority.
///
/// See [`disorder_span`] for the direction and tie-break rules.
pub fn reorder_span(tasks: &[Task]) -> Option<(usize, usize)> {
    let priorities: Vec<i64> = tasks.iter().map(Task::priority).collect();
    disorder_span(&priorities)
}
