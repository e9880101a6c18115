//! # Repository Module
//!
//! Database repository implementations for the quote store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Caller                                                                │
//! │       │                                                                 │
//! │       │  db.quotes().insert(&header, &made, &rolls)                    │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  QuoteRepository                                                       │
//! │  ├── insert(&self, header, made_items, roll_items) -> id               │
//! │  ├── get_by_id(&self, id) -> (quote, made_items, roll_items)           │
//! │  ├── list(&self) -> summaries                                          │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Can swap database implementations                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`quote::QuoteRepository`] - Quote graph CRUD (header + both item lists)

pub mod quote;
