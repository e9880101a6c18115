//! # Tax Rate Tables
//!
//! Static per-state rate tables for ICMS (display only) and ST
//! (Substituição Tributária).
//!
//! ## Lookup Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rate Lookup (total functions)                      │
//! │                                                                         │
//! │  icms_display("SP")  ──► 18      (explicit entry)                       │
//! │  icms_display("BA")  ──► 7       (baseline, no entry needed)            │
//! │  icms_display("zz")  ──► 7       (unknown code, same baseline)          │
//! │                                                                         │
//! │  st_rate("SP")       ──► 14      (explicit entry)                       │
//! │  st_rate("SC")       ──► 0       (explicit zero entry)                  │
//! │  st_rate("zz")       ──► 0       (unknown code)                         │
//! │                                                                         │
//! │  There is NO error path. Unknown state codes fall back to the           │
//! │  baseline instead of failing.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Construction
//! `TaxTables` is built complete and never mutated afterwards. Callers pass
//! it (by reference or value) into the aggregator; there is no module-level
//! mutable state to populate in the right order.

use serde::{Deserialize, Serialize};

/// ICMS display rate applied to every state without an explicit override.
pub const ICMS_BASELINE: f64 = 7.0;

/// States with a non-baseline ICMS display rate.
const ICMS_OVERRIDES: &[(&str, f64)] = &[
    ("SP", 18.0),
    ("MG", 12.0),
    ("PR", 12.0),
    ("RJ", 12.0),
    ("RS", 12.0),
    ("SC", 12.0),
];

/// ST rate per state. Every state has an explicit entry, including zeros.
const ST_RATES: &[(&str, f64)] = &[
    ("SP", 14.0),
    ("RJ", 27.0),
    ("MG", 22.0),
    ("ES", 0.0),
    ("PR", 22.0),
    ("RS", 20.0),
    ("SC", 0.0),
    ("BA", 29.0),
    ("PE", 29.0),
    ("CE", 19.0),
    ("RN", 0.0),
    ("PB", 29.0),
    ("SE", 0.0),
    ("AL", 29.0),
    ("DF", 29.0),
    ("GO", 0.0),
    ("MS", 0.0),
    ("MT", 22.0),
    ("AM", 29.0),
    ("PA", 26.0),
    ("RO", 0.0),
    ("RR", 27.0),
    ("AC", 27.0),
    ("AP", 29.0),
    ("MA", 29.0),
    ("PI", 22.0),
    ("TO", 0.0),
];

// =============================================================================
// Tax Tables
// =============================================================================

/// Immutable rate tables injected into the pricing engine.
///
/// ## Example
/// ```rust
/// use lona_core::tax::TaxTables;
///
/// let tables = TaxTables::new();
/// assert_eq!(tables.icms_display("SP"), 18.0);
/// assert_eq!(tables.st_rate("RJ"), 27.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTables {
    icms_overrides: Vec<(String, f64)>,
    icms_baseline: f64,
    st_rates: Vec<(String, f64)>,
}

impl TaxTables {
    /// Builds the complete tables.
    pub fn new() -> Self {
        TaxTables {
            icms_overrides: ICMS_OVERRIDES
                .iter()
                .map(|(uf, rate)| (uf.to_string(), *rate))
                .collect(),
            icms_baseline: ICMS_BASELINE,
            st_rates: ST_RATES
                .iter()
                .map(|(uf, rate)| (uf.to_string(), *rate))
                .collect(),
        }
    }

    /// ICMS display rate (percent) for a state code.
    ///
    /// Informational only: the rate is assumed already baked into the unit
    /// price and is shown to the operator, never added to the total.
    pub fn icms_display(&self, state: &str) -> f64 {
        self.icms_overrides
            .iter()
            .find(|(uf, _)| uf == state)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.icms_baseline)
    }

    /// ST rate (percent) for a state code. Unknown codes are 0.
    pub fn st_rate(&self, state: &str) -> f64 {
        self.st_rates
            .iter()
            .find(|(uf, _)| uf == state)
            .map(|(_, rate)| *rate)
            .unwrap_or(0.0)
    }
}

impl Default for TaxTables {
    fn default() -> Self {
        TaxTables::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
