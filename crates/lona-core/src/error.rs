//! # Error Types
//!
//! Domain-specific error types for lona-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lona-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lona-db errors (separate crate)                                       │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  lona-docs errors (separate crate)                                     │
//! │  └── DocError         - Document generation failures                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → surfaced to the operator          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: the pricing engine itself has no error path.
//! Unknown states fall back to default rates, unknown products fall back to
//! default IPI, empty item lists produce all-zero totals. Errors exist only
//! at the draft boundary (bad input) and at the collaborator boundaries
//! (storage, rendering).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised at the draft boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Submitting a draft with no items at all.
    #[error("quote has no items")]
    EmptyQuote,

    /// Removing an item at an index the draft does not have.
    #[error("no {kind} item at index {index}")]
    NoSuchItem { kind: &'static str, index: usize },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the minimums the entry form enforces (positive dimensions,
/// quantity of at least one, thickness for thickness-specified families).
/// Anything beyond these minimums is accepted as-is.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Dimension must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    /// Quantity must be at least one.
    #[error("quantity must be at least 1, got {got}")]
    QuantityTooSmall { got: i64 },

    /// Product family is specified by thickness but none was given.
    #[error("product '{product}' requires a thickness")]
    ThicknessRequired { product: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
