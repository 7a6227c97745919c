//! Input validation for bisearch components.
//!
//! ## Purpose
//!
//! This module provides validation functions for the constructor and query
//! arguments of the analysis components: table dimensions, rank queries,
//! cell coordinates, and piece-length lists.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform the searches themselves.

// Internal dependencies
use crate::primitives::errors::BisearchError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for bisearch component inputs.
///
/// Provides static methods for validating component arguments. All methods
/// return `Result<(), BisearchError>` and fail fast upon identifying the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate multiplication table dimensions.
    pub fn validate_dimensions(rows: u32, cols: u32) -> Result<(), BisearchError> {
        if rows == 0 || cols == 0 {
            return Err(BisearchError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Validate that a rank query lies in `[1, size]`.
    pub fn validate_rank(k: u64, size: u64) -> Result<(), BisearchError> {
        if k == 0 || k > size {
            return Err(BisearchError::RankOutOfRange { k, size });
        }
        Ok(())
    }

    /// Validate 1-based cell coordinates against the table bounds.
    pub fn validate_cell(row: u32, col: u32, rows: u32, cols: u32) -> Result<(), BisearchError> {
        if row == 0 || row > rows || col == 0 || col > cols {
            return Err(BisearchError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok(())
    }

    /// Validate that every piece length is positive.
    pub fn validate_lengths(lengths: &[u64]) -> Result<(), BisearchError> {
        for (index, &length) in lengths.iter().enumerate() {
            if length == 0 {
                return Err(BisearchError::ZeroLength { index });
            }
        }
        Ok(())
    }
}
