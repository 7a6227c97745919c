//! Layer 3: Analysis
//!
//! # Purpose
//!
//! This layer provides the user-facing components. Each one is an
//! independent leaf with no dependencies on its siblings:
//!
//! - **isqrt**: floor square root via bisection
//! - **table**: k-th smallest entry of an implicit multiplication table
//! - **pieces**: maximum feasible piece size under a distribution constraint
//! - **wave**: in-place wave rearrangement and its validation predicate
//! - **indexer**: first-occurrence index over an unsorted backing array
//! - **disorder**: minimal reorder span restoring monotonic order
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Analysis ← You are here
//!   ↓
//! Layer 2: Search
//!   ↓
//! Layer 1: Primitives
//! ```

/// Floor square root.
pub mod isqrt;

/// Implicit multiplication table rank queries.
pub mod table;

/// Piece-size optimization.
pub mod pieces;

/// Wave-pattern rearrangement.
pub mod wave;

/// First-occurrence value index.
pub mod indexer;

/// Reorder-span detection.
pub mod disorder;
