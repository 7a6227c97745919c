#![cfg(feature = "dev")]
//! Tests for the piece-size optimizer.
//!
//! These tests verify the half-unit piece-size search:
//! - Documented example optimizations (including the fractional optimum)
//! - Impossibility guards
//! - Text parsing and its validation errors
//! - Length replacement and the accessors
//!
//! ## Test Organization
//!
//! 1. **Documented Optimizations** - fixed expected outputs
//! 2. **Impossibility Guards** - cases that return zero
//! 3. **Text Construction** - parsing and rejected tokens
//! 4. **Replacement and Accessors** - stored-state behavior

use approx::assert_relative_eq;

use bisearch::prelude::*;

// ============================================================================
// Documented Optimization Tests
// ============================================================================

/// Test the documented integral optimum.
///
/// Verifies `[1, 2, 3, 4, 5]` with 3 friends yields size 3.
#[test]
fn test_integral_optimum() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(vec![1, 2, 3, 4, 5])?;

    assert_relative_eq!(optimizer.max_piece_size(3), 3.0);

    Ok(())
}

/// Test the documented fractional optimum.
///
/// Verifies `[10, 10, 10]` with 10 friends yields size 2.5.
#[test]
fn test_fractional_optimum() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(vec![10, 10, 10])?;

    assert_relative_eq!(optimizer.max_piece_size(10), 2.5);

    Ok(())
}

/// Test a single friend.
///
/// Verifies that one friend receives the longest whole piece.
#[test]
fn test_single_friend() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(vec![3, 9, 5])?;

    assert_relative_eq!(optimizer.max_piece_size(1), 9.0);

    Ok(())
}

/// Test friends equal to the total length.
///
/// Verifies the search bottoms out at size 1 exactly when every unit is
/// needed.
#[test]
fn test_every_unit_needed() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(vec![2, 3])?;

    assert_relative_eq!(optimizer.max_piece_size(5), 1.0);

    Ok(())
}

// ============================================================================
// Impossibility Guard Tests
// ============================================================================

/// Test the zero-head-count guard.
///
/// Verifies that zero friends always yields zero.
#[test]
fn test_zero_friends() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(vec![1, 2, 3])?;

    assert_relative_eq!(optimizer.max_piece_size(0), 0.0);

    Ok(())
}

/// Test the empty-input guard.
///
/// Verifies that an optimizer without lengths yields zero.
#[test]
fn test_empty_lengths() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(Vec::new())?;

    assert_relative_eq!(optimizer.max_piece_size(3), 0.0);

    Ok(())
}

/// Test the insufficient-total guard.
///
/// Verifies that a total length below the head count yields zero.
#[test]
fn test_insufficient_total() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(vec![1, 2])?;

    assert_relative_eq!(optimizer.max_piece_size(4), 0.0);

    Ok(())
}

// ============================================================================
// Text Construction Tests
// ============================================================================

/// Test parsing a well-formed length string.
///
/// Verifies whitespace-delimited parsing matches the vector constructor.
#[test]
fn test_from_text() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::from_text("1 2 3 4 5")?;

    assert_eq!(optimizer.lengths(), &[1, 2, 3, 4, 5]);
    assert_relative_eq!(optimizer.max_piece_size(3), 3.0);

    Ok(())
}

/// Test parsing with irregular whitespace.
///
/// Verifies tabs and repeated spaces are accepted separators.
#[test]
fn test_from_text_irregular_whitespace() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::from_text("  10\t10   10 ")?;

    assert_eq!(optimizer.count(), 3);

    Ok(())
}

/// Test rejected tokens.
///
/// Verifies unparsable and negative tokens fail with the offending token
/// preserved.
#[test]
fn test_from_text_invalid_tokens() {
    assert_eq!(
        PieceSizeOptimizer::from_text("1 two 3").unwrap_err(),
        BisearchError::InvalidToken("two".into())
    );
    assert_eq!(
        PieceSizeOptimizer::from_text("1 -2 3").unwrap_err(),
        BisearchError::InvalidToken("-2".into())
    );
}

/// Test rejected zero lengths.
///
/// Verifies both constructors report the offending position.
#[test]
fn test_zero_length_rejected() {
    assert_eq!(
        PieceSizeOptimizer::from_text("1 0 3").unwrap_err(),
        BisearchError::ZeroLength { index: 1 }
    );
    assert_eq!(
        PieceSizeOptimizer::new(vec![4, 4, 0]).unwrap_err(),
        BisearchError::ZeroLength { index: 2 }
    );
}

// ============================================================================
// Replacement and Accessor Tests
// ============================================================================

/// Test the accessors.
///
/// Verifies count and total length describe the stored lengths.
#[test]
fn test_accessors() -> Result<(), BisearchError> {
    let optimizer = PieceSizeOptimizer::new(vec![10, 10, 10])?;

    assert_eq!(optimizer.count(), 3);
    assert_eq!(optimizer.total_length(), 30);
    assert_eq!(optimizer.lengths(), &[10, 10, 10]);

    Ok(())
}

/// Test wholesale length replacement.
///
/// Verifies subsequent optimizations see only the new lengths.
#[test]
fn test_replace_lengths() -> Result<(), BisearchError> {
    let mut optimizer = PieceSizeOptimizer::new(vec![1, 2, 3, 4, 5])?;
    optimizer.replace_lengths(vec![10, 10, 10])?;

    assert_eq!(optimizer.total_length(), 30);
    assert_relative_eq!(optimizer.max_piece_size(10), 2.5);

    Ok(())
}

/// Test that failed replacement keeps the previous lengths.
///
/// Verifies the optimizer state is untouched on validation failure.
#[test]
fn test_replace_lengths_failure_keeps_state() -> Result<(), BisearchError> {
    let mut optimizer = PieceSizeOptimizer::new(vec![1, 2, 3])?;

    assert!(optimizer.replace_lengths(vec![5, 0]).is_err());
    assert_eq!(optimizer.lengths(), &[1, 2, 3]);

    Ok(())
}
