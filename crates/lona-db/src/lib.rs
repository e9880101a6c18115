//! # lona-db: Database Layer for Lona
//!
//! This crate provides database access for the Lona quotation system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Lona Data Flow                                  │
//! │                                                                         │
//! │  DraftQuote::submit() (lona-core)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      lona-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (quote.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ QuoteRepo     │    │ 001_init.sql │  │   │
//! │  │   │ Connection    │    │ insert/get/   │    │ 002_price    │  │   │
//! │  │   │ Management    │    │ list/delete   │    │ 003_override │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (./orcamentos.db)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Quote repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lona_db::{Database, DbConfig};
//!
//! // Create database with the fixed default file
//! let db = Database::new(DbConfig::default_file()).await?;
//!
//! // Store a submitted quote
//! let id = db.quotes().insert(&header, &made_items, &roll_items).await?;
//!
//! // Reopen it later
//! let (quote, made, rolls) = db.quotes().get_by_id(id).await?.unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DEFAULT_DB_FILE};

// Repository re-exports for convenience
pub use repository::quote::QuoteRepository;
