//! # lona-core: Pure Business Logic for Lona
//!
//! This crate is the **heart** of Lona, the quotation generator for a
//! tarpaulin/PVC-goods distributor. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Lona Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Operator flow                             │   │
//! │  │   fill form ──► add items ──► preview ──► submit ──► print      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lona-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    tax    │  │  pricing  │  │   draft   │  │   │
//! │  │   │   Quote   │  │ TaxTables │  │ IPI / ST  │  │DraftQuote │  │   │
//! │  │   │   Items   │  │ ICMS view │  │  totals   │  │ add/submit│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                │                                 │                      │
//! │  ┌─────────────▼─────────────┐   ┌───────────────▼─────────────────┐   │
//! │  │   lona-db (persistence)   │   │   lona-docs (PDF / XLSX)        │   │
//! │  │   SQLite, migrations      │   │   printable quote, history      │   │
//! │  └───────────────────────────┘   └─────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Quote, MadeItem, RollItem, enums)
//! - [`catalog`] - Product catalog and product-family rules
//! - [`tax`] - Immutable ICMS/ST rate tables
//! - [`pricing`] - The quote pricing engine (IPI, ST, totals)
//! - [`format`] - Brazilian currency/measure formatting
//! - [`draft`] - Draft quote state (add/remove/clear/submit)
//! - [`error`] - Domain error types
//! - [`validation`] - Line-item validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Total lookups**: Unknown states and products fall back to defaults,
//!    they never error
//! 4. **Late rounding**: Amounts stay unrounded `f64` until [`format`]
//!    renders them
//!
//! ## Example Usage
//!
//! ```rust
//! use lona_core::draft::DraftQuote;
//! use lona_core::format::format_brl;
//! use lona_core::tax::TaxTables;
//! use lona_core::types::MadeItem;
//!
//! let mut draft = DraftQuote::new();
//! draft.header.base_price = 10.0;
//! draft.add_made_item(MadeItem {
//!     product: "Lonil de PVC".to_string(),
//!     length_m: 2.0,
//!     width_m: 1.5,
//!     quantity: 3,
//!     color: "Azul".to_string(),
//!     unit_price: None,
//! }).unwrap();
//!
//! let submission = draft.submit(&TaxTables::new()).unwrap();
//! assert_eq!(submission.made_totals.gross_total, 90.0);
//! assert_eq!(format_brl(submission.made_totals.gross_total), "R$ 90,00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod draft;
pub mod error;
pub mod format;
pub mod pricing;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lona_core::Quote` instead of
// `use lona_core::types::Quote`

pub use draft::{DraftQuote, QuoteSubmission};
pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{MadeTotals, RollTotals};
pub use tax::TaxTables;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quote validity printed on every document, in calendar days.
///
/// ## Why a constant?
/// The validity window is commercial policy, not operator input. Keeping it
/// here means the document layer and any future reminder logic agree on it.
pub const QUOTE_VALIDITY_DAYS: u32 = 7;
