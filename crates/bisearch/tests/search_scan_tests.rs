#![cfg(feature = "dev")]
//! Tests for directional order scans.
//!
//! These tests verify the forward/backward violation scans used by the
//! reorder-span detector:
//! - First and last strict-order violations per direction
//! - Monotone inputs (including equal neighbors)
//! - Short inputs
//!
//! ## Test Organization
//!
//! 1. **Ascending Scans** - violations of ascending order
//! 2. **Descending Scans** - violations of descending order
//! 3. **Monotone Inputs** - no violation in the scanned direction
//! 4. **Edge Cases** - empty and single-element inputs

use bisearch::internals::search::scan::{Direction, unsorted_segment};

// ============================================================================
// Ascending Scan Tests
// ============================================================================

/// Test a single out-of-place pair in the middle.
///
/// Verifies both scan directions agree on the segment.
#[test]
fn test_ascending_middle_violation() {
    let values = [1, 2, 4, 3, 5];

    assert_eq!(unsorted_segment(&values, Direction::Ascending), Some((2, 3)));
}

/// Test violations spanning most of the input.
///
/// Verifies the first forward and first backward violations anchor the
/// segment.
#[test]
fn test_ascending_wide_violation() {
    let values = [5, 4, 2, 3, 1];

    assert_eq!(unsorted_segment(&values, Direction::Ascending), Some((0, 4)));
}

/// Test that equal neighbors do not break ascending order.
///
/// Verifies the strict comparison contract.
#[test]
fn test_ascending_ties_ignored() {
    let values = [1, 2, 2, 3];

    assert_eq!(unsorted_segment(&values, Direction::Ascending), None);
}

// ============================================================================
// Descending Scan Tests
// ============================================================================

/// Test the mirrored scan on the same data.
///
/// Verifies the descending direction uses the mirrored comparison.
#[test]
fn test_descending_middle_violation() {
    let values = [5, 4, 2, 3, 1];

    assert_eq!(
        unsorted_segment(&values, Direction::Descending),
        Some((2, 3))
    );
}

/// Test that equal neighbors do not break descending order.
///
/// Verifies the strict comparison contract in the mirrored direction.
#[test]
fn test_descending_ties_ignored() {
    let values = [3, 2, 2, 1];

    assert_eq!(unsorted_segment(&values, Direction::Descending), None);
}

// ============================================================================
// Monotone Input Tests
// ============================================================================

/// Test a strictly ascending input in both directions.
///
/// Verifies `None` for the matching direction and a full span for the
/// mirrored one.
#[test]
fn test_sorted_input() {
    let values = [1, 2, 3, 4, 5];

    assert_eq!(unsorted_segment(&values, Direction::Ascending), None);
    assert_eq!(
        unsorted_segment(&values, Direction::Descending),
        Some((0, 4))
    );
}

/// Test a constant input.
///
/// Verifies that equal runs are monotone in both directions.
#[test]
fn test_constant_input() {
    let values = [7, 7, 7, 7];

    assert_eq!(unsorted_segment(&values, Direction::Ascending), None);
    assert_eq!(unsorted_segment(&values, Direction::Descending), None);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test empty and single-element inputs.
///
/// Verifies that inputs without an adjacent pair never report a segment.
#[test]
fn test_short_inputs() {
    let empty: [i64; 0] = [];

    assert_eq!(unsorted_segment(&empty, Direction::Ascending), None);
    assert_eq!(unsorted_segment(&[42], Direction::Ascending), None);
}

/// Test floating-point values.
///
/// Verifies the scan is generic over `PartialOrd` data.
#[test]
fn test_float_values() {
    let values = [1.0, 3.5, 2.25, 4.0];

    assert_eq!(unsorted_segment(&values, Direction::Ascending), Some((1, 2)));
}
