//! Error types for bisearch operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the
//! analysis components: invalid constructor arguments, out-of-range
//! queries, unparsable input tokens, and infeasible transformations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., the rank
//!   and the table size it exceeded).
//! * **Deterministic**: Every error is a pure function of the input; no
//!   transient or retryable failures exist.
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//! * **Trait Implementation**: Implements `Display` and
//!   `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Validation errors**: Rejected constructor or query arguments
//!    (`InvalidDimensions`, `RankOutOfRange`, `CellOutOfRange`,
//!    `ZeroLength`, `InvalidToken`).
//! 2. **Infeasibility**: Input that provably cannot satisfy the requested
//!    transformation (`WaveInfeasible`). Distinct from validation: the
//!    arguments are well-formed, the constraint is unsatisfiable.
//! 3. **Sentinels are not errors**: Absent lookups return `None`, never a
//!    variant of this enum.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for bisearch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BisearchError {
    /// Multiplication table dimensions must both be at least 1.
    InvalidDimensions {
        /// Requested number of rows.
        rows: u32,
        /// Requested number of columns.
        cols: u32,
    },

    /// Requested rank lies outside `[1, size]` for the queried table.
    RankOutOfRange {
        /// The rank requested.
        k: u64,
        /// Total number of entries in the table.
        size: u64,
    },

    /// Cell coordinates fall outside the table bounds (1-based).
    CellOutOfRange {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Number of rows in the table.
        rows: u32,
        /// Number of columns in the table.
        cols: u32,
    },

    /// Piece lengths must be positive.
    ZeroLength {
        /// Position of the offending length in the input.
        index: usize,
    },

    /// A length token could not be parsed as a positive integer.
    InvalidToken(String),

    /// The input cannot be rearranged into a wave pattern.
    WaveInfeasible {
        /// Length of the offending input.
        len: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BisearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid table dimensions: {rows}x{cols} (rows and cols must be at least 1)"
                )
            }
            Self::RankOutOfRange { k, size } => {
                write!(f, "Rank {k} out of range (must be between 1 and {size})")
            }
            Self::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(f, "Cell ({row}, {col}) lies outside the {rows}x{cols} table")
            }
            Self::ZeroLength { index } => {
                write!(f, "Invalid length at position {index}: lengths must be positive")
            }
            Self::InvalidToken(token) => {
                write!(f, "Invalid length token: '{token}'")
            }
            Self::WaveInfeasible { len } => {
                write!(f, "Cannot arrange {len} element(s) into a wave pattern")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for BisearchError {}
