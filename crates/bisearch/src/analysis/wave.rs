//! Wave-pattern rearrangement and validation.
//!
//! ## Purpose
//!
//! This module rearranges a sequence in place into the alternating
//! low/high "wave" pattern (every even index a strict local minimum,
//! every odd index a strict local maximum) and exposes the matching
//! validation predicate.
//!
//! ## Design notes
//!
//! * **Sort and interleave**: The sorted lower half fills the even
//!   positions, the upper half the odd positions. Even positions take
//!   `ceil(n / 2)` elements so odd lengths interleave cleanly.
//! * **Verified before committing**: The interleaved candidate is checked
//!   against the strict alternating property; on failure (e.g. all-equal
//!   input) the original data is left untouched.
//! * **Float ordering**: Elements are ordered with `partial_cmp`, ties
//!   treated as equal, as elsewhere in the crate's float handling.
//!
//! ## Key concepts
//!
//! * **Infeasibility is an error**: Length 1, and length 2 with equal
//!   elements, can never form a wave; both fail with
//!   [`BisearchError::WaveInfeasible`]. Other lengths below 3 are left
//!   unchanged.
//!
//! ## Invariants
//!
//! * On success the data is a permutation of the input satisfying
//!   [`is_wave_pattern`].
//! * On failure the data is bitwise unchanged.
//!
//! ## Non-goals
//!
//! * This module does not search for an alternative permutation when the
//!   sorted interleave fails; infeasibility is reported instead.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BisearchError;

// ============================================================================
// Wave Predicate
// ============================================================================

/// Whether `data` already satisfies the wave pattern.
///
/// Every even-indexed element must be strictly less than its successor
/// and every odd-indexed element strictly greater. Lengths below 2 are
/// vacuously waves.
pub fn is_wave_pattern<T: Float>(data: &[T]) -> bool {
    data.windows(2).enumerate().all(|(i, pair)| {
        if i % 2 == 0 {
            pair[0] < pair[1]
        } else {
            pair[0] > pair[1]
        }
    })
}

// ============================================================================
// Wave Transform
// ============================================================================

/// Rearrange `data` in place into a wave pattern.
///
/// Fails with [`BisearchError::WaveInfeasible`] when no permutation of the
/// data forms a wave: a single element, two equal elements, or a sorted
/// interleave that violates the alternating property (all-equal data and
/// heavily tied data fall here). Lengths 0 and 2-with-distinct-elements
/// are left unchanged.
pub fn transform_to_wave<T: Float>(data: &mut [T]) -> Result<(), BisearchError> {
    let n = data.len();

    if n < 3 {
        if n == 1 || (n == 2 && data[0] == data[1]) {
            return Err(BisearchError::WaveInfeasible { len: n });
        }
        return Ok(());
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    // Lower half into even positions, upper half into odd positions.
    let split = n.div_ceil(2);
    let mut candidate: Vec<T> = Vec::with_capacity(n);
    let (lower, upper) = sorted.split_at(split);
    for i in 0..n {
        if i % 2 == 0 {
            candidate.push(lower[i / 2]);
        } else {
            candidate.push(upper[i / 2]);
        }
    }

    if !is_wave_pattern(&candidate) {
        return Err(BisearchError::WaveInfeasible { len: n });
    }

    data.copy_from_slice(&candidate);
    Ok(())
}
