//! # bisearch — binary-search-on-answer and sequence-order analysis
//!
//! A small, dependency-light toolkit of pure-computation components built
//! around two ideas:
//!
//! - **Binary search on the answer**: searching the space of possible
//!   output values with a monotone feasibility predicate, rather than
//!   searching array indices. This powers the integer square root, the
//!   k-th smallest entry of an implicit multiplication table, and the
//!   maximum feasible piece size under a distribution constraint.
//! - **Directional order scans**: linear two-pointer passes that locate
//!   where a sequence stops being monotonic. This powers the minimal
//!   reorder-span detector and the wave-pattern transform.
//!
//! All components are synchronous, deterministic, and free of I/O. Each is
//! independent of the others and operates on in-memory sequences only.
//!
//! ## Quick Start
//!
//! ```rust
//! use bisearch::prelude::*;
//!
//! // Floor square root via binary search over the candidate answer.
//! assert_eq!(int_sqrt(16), 4);
//! assert_eq!(int_sqrt(8), 2);
//!
//! // K-th smallest entry of the implicit 3x3 multiplication table.
//! let table = MultiplicationTable::new(3, 3)?;
//! assert_eq!(table.kth_smallest(7)?, 6);
//!
//! // Largest piece size that still yields enough pieces for everyone.
//! let optimizer = PieceSizeOptimizer::new(vec![1, 2, 3, 4, 5])?;
//! assert_eq!(optimizer.max_piece_size(3), 3.0);
//!
//! // Minimal subrange whose reordering can restore monotonic order.
//! let tasks = vec![
//!     Task::new("A", 1),
//!     Task::new("B", 2),
//!     Task::new("C", 4),
//!     Task::new("D", 3),
//!     Task::new("E", 5),
//! ];
//! assert_eq!(reorder_span(&tasks), Some((2, 3)));
//!
//! // In-place wave rearrangement and its validation predicate.
//! let mut data = vec![6.0, 2.0, 3.0, 8.0, 11.0, 2.0];
//! transform_to_wave(&mut data)?;
//! assert!(is_wave_pattern(&data));
//!
//! // First-occurrence index over an unsorted backing array.
//! let index = ValueIndex::new(vec![7, 3, 1, 3, 5]);
//! assert_eq!(index.get(&3), Some(1));
//! assert_eq!(index.get(&6), None);
//! # Result::<(), BisearchError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, BisearchError>`. Every error is a
//! deterministic function of the input; there are no transient failures.
//! Absent lookups are **not** errors: [`prelude::ValueIndex::get`] returns
//! `None` as its not-found sentinel.
//!
//! ```rust
//! use bisearch::prelude::*;
//!
//! match MultiplicationTable::new(0, 5) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(matches!(e, BisearchError::InvalidDimensions { .. })),
//! }
//! ```
//!
//! ## Concurrency
//!
//! Components hold no shared state and spawn nothing. Instance mutation
//! (replacing a backing array or length list) is single-writer with no
//! concurrent readers; callers needing concurrent access must serialize
//! externally.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! bisearch = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error type and validation helpers.
mod primitives;

// Layer 2: Search - monotone-predicate bisection and order scans.
mod search;

// Layer 3: Analysis - the user-facing components.
mod analysis;

// Standard bisearch prelude.
pub mod prelude {
    pub use crate::analysis::disorder::{Task, disorder_span, reorder_span};
    pub use crate::analysis::indexer::ValueIndex;
    pub use crate::analysis::isqrt::int_sqrt;
    pub use crate::analysis::pieces::PieceSizeOptimizer;
    pub use crate::analysis::table::MultiplicationTable;
    pub use crate::analysis::wave::{is_wave_pattern, transform_to_wave};
    pub use crate::primitives::errors::BisearchError;
    pub use crate::search::scan::{
        Direction::{self, Ascending, Descending},
        unsorted_segment,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal layers for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod search {
        pub use crate::search::*;
    }
    pub mod analysis {
        pub use crate::analysis::*;
    }
}
