//! # lona-docs: Document Layer for Lona
//!
//! Turns fully-computed quotes into deliverable artifacts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lona Document Flow                               │
//! │                                                                         │
//! │  DraftQuote::submit() ──► QuoteSubmission (lona-core)                  │
//! │       │                        │                                        │
//! │       │ insert (lona-db)       │                                        │
//! │       ▼                        ▼                                        │
//! │   quote id ───────────► render_quote() ──► PDF bytes (download/print)  │
//! │                                                                         │
//! │  QuoteRepository::list / get_by_id                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuoteExportRow::from_quote ──► export_quotes() ──► XLSX bytes         │
//! │                                                                         │
//! │  This crate formats and lays out. ALL tax math happens upstream in     │
//! │  lona-core; a document never recomputes a total.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pdf`] - The printable quote document
//! - [`xlsx`] - The one-row-per-quote history export
//! - [`error`] - Document error types

pub mod error;
pub mod pdf;
pub mod xlsx;

pub use error::{DocError, DocResult};
pub use pdf::render_quote;
pub use xlsx::{export_quotes, QuoteExportRow};
