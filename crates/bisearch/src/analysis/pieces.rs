//! Piece-size optimization under a distribution constraint.
//!
//! ## Purpose
//!
//! This module finds the largest piece size into which a collection of
//! lengths can be cut so that the number of resulting pieces still covers
//! a required head count.
//!
//! ## Design notes
//!
//! * **Half-unit domain**: The search runs over integer half-units
//!   (candidate `h` encodes size `h / 2`), so the documented fractional
//!   optima (e.g. `2.5`) are exact while the bisection stays integral.
//!   Optima finer than half a unit round down to the nearest half unit.
//! * **Monotone predicate**: The piece count `sum(floor(length / size))`
//!   is non-increasing in the size, enabling a maximizing bisection.
//! * **Guards before searching**: Empty input, a zero head count, or a
//!   total length below the head count short-circuit to `0`.
//!
//! ## Invariants
//!
//! * Every stored length is positive (both constructors validate).
//! * Under the guards, size 1 is always feasible, so the search never
//!   comes back empty.
//!
//! ## Non-goals
//!
//! * This module does not plan the actual cuts; it only sizes them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::BisearchError;
use crate::primitives::validate::Validator;
use crate::search::bisect::max_satisfying;

// ============================================================================
// Piece-Size Optimizer
// ============================================================================

/// Optimizer for the largest feasible piece size over a list of lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceSizeOptimizer {
    /// Piece lengths, all positive.
    lengths: Vec<u64>,
}

impl PieceSizeOptimizer {
    /// Create an optimizer over the given lengths.
    ///
    /// Fails with [`BisearchError::ZeroLength`] when any length is zero.
    pub fn new(lengths: Vec<u64>) -> Result<Self, BisearchError> {
        Validator::validate_lengths(&lengths)?;
        Ok(Self { lengths })
    }

    /// Create an optimizer from a whitespace-delimited list of lengths,
    /// e.g. `"1 2 3 4 5"`.
    ///
    /// Fails with [`BisearchError::InvalidToken`] for tokens that do not
    /// parse as positive integers and [`BisearchError::ZeroLength`] for
    /// explicit zeros.
    pub fn from_text(text: &str) -> Result<Self, BisearchError> {
        let lengths = text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u64>()
                    .map_err(|_| BisearchError::InvalidToken(token.to_string()))
            })
            .collect::<Result<Vec<u64>, BisearchError>>()?;
        Self::new(lengths)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Sum of all lengths.
    pub fn total_length(&self) -> u64 {
        self.lengths.iter().sum()
    }

    /// Number of lengths.
    pub fn count(&self) -> usize {
        self.lengths.len()
    }

    /// Borrow of the stored lengths.
    pub fn lengths(&self) -> &[u64] {
        &self.lengths
    }

    /// Replace the stored lengths wholesale.
    ///
    /// Fails with [`BisearchError::ZeroLength`] when any new length is
    /// zero; the previous lengths are kept on failure.
    pub fn replace_lengths(&mut self, lengths: Vec<u64>) -> Result<(), BisearchError> {
        Validator::validate_lengths(&lengths)?;
        self.lengths = lengths;
        Ok(())
    }

    // ========================================================================
    // Optimization
    // ========================================================================

    /// Largest piece size `s` with `sum(floor(length / s)) >= friends`,
    /// in half-unit resolution.
    ///
    /// Returns `0.0` when the division is impossible: no lengths, a zero
    /// head count, or a total length below the head count.
    pub fn max_piece_size(&self, friends: u64) -> f64 {
        if friends == 0 || self.lengths.is_empty() || self.total_length() < friends {
            return 0.0;
        }

        let max_length = self.lengths.iter().copied().max().unwrap_or(0);

        // Candidate h encodes piece size h / 2. At h = 2 (size 1) the
        // piece count equals the total length, which the guard above
        // proved sufficient.
        let best = max_satisfying(1, 2 * max_length, |h| self.pieces_at(h) >= friends);

        match best {
            Some(half_units) => half_units as f64 / 2.0,
            None => 0.0,
        }
    }

    /// Number of pieces obtainable at the piece size `half_units / 2`.
    fn pieces_at(&self, half_units: u64) -> u64 {
        self.lengths
            .iter()
            .map(|&length| (2 * length) / half_units)
            .sum()
    }
}
