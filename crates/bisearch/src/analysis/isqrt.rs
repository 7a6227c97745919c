//! Integer square root via bisection.
//!
//! ## Purpose
//!
//! This module computes the floor square root of a non-negative integer
//! without floating-point arithmetic, using binary search over the
//! candidate answer range.
//!
//! ## Design notes
//!
//! * **Overflow-free**: The square comparison `m * m <= x` is evaluated as
//!   `m <= x / m`, which is equivalent under integer division and never
//!   overflows, so the full `u64` domain is supported.
//!
//! ## Invariants
//!
//! * The result `r` satisfies `r * r <= x < (r + 1) * (r + 1)`.
//! * Terminates in O(log x) steps.

// Internal dependencies
use crate::search::bisect::max_satisfying;

// ============================================================================
// Integer Square Root
// ============================================================================

/// Compute `floor(sqrt(x))`.
///
/// Binary-searches the greatest `r` in `[1, x]` with `r * r <= x`; zero is
/// a direct base case.
pub fn int_sqrt(x: u64) -> u64 {
    if x == 0 {
        return 0;
    }

    // m <= x / m is m * m <= x without the overflowing multiply.
    max_satisfying(1, x, |m| m <= x / m).unwrap_or(0)
}
