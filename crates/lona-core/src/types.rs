//! # Domain Types
//!
//! Core domain types used throughout Lona.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Quote       │   │    MadeItem     │   │    RollItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64, seq)  │   │  product        │   │  product        │       │
//! │  │  client block   │   │  length × width │   │  length         │       │
//! │  │  seller block   │   │  quantity       │   │  quantity       │       │
//! │  │  base_price     │   │  unit_price?    │   │  thickness_mm?  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ClientKind    │   │   FreightTerm   │   │   OrderMode     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ConsumidorFinal│   │  Cif            │   │  Direta         │       │
//! │  │  Revenda        │   │  Fob            │   │  Industrializa. │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A quote is identified by an auto-assigned sequential integer (SQLite
//! AUTOINCREMENT). Items have no identity of their own beyond the quote they
//! belong to; a quote exclusively owns its item lists.
//!
//! ## Monetary values
//! Amounts are `f64` reais. The tax chain produces legitimate sub-cent
//! values (e.g. 92.925) that must reach the display layer unrounded, so
//! rounding happens only in [`crate::format`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Client Kind
// =============================================================================

/// The tax category of the client.
///
/// Resale clients (`Revenda`) can trigger the ST surcharge; end consumers
/// never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum ClientKind {
    /// End consumer ("Consumidor Final").
    #[serde(rename = "Consumidor Final")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Consumidor Final"))]
    ConsumidorFinal,
    /// Reseller ("Revenda").
    #[serde(rename = "Revenda")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Revenda"))]
    Revenda,
}

impl ClientKind {
    /// Display string as the sales team knows it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClientKind::ConsumidorFinal => "Consumidor Final",
            ClientKind::Revenda => "Revenda",
        }
    }
}

impl Default for ClientKind {
    fn default() -> Self {
        ClientKind::ConsumidorFinal
    }
}

// =============================================================================
// Freight Term
// =============================================================================

/// Who pays the freight: seller (CIF) or buyer (FOB).
/// Informational only, never enters the price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum FreightTerm {
    #[serde(rename = "CIF")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "CIF"))]
    Cif,
    #[serde(rename = "FOB")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "FOB"))]
    Fob,
}

impl FreightTerm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FreightTerm::Cif => "CIF",
            FreightTerm::Fob => "FOB",
        }
    }
}

impl Default for FreightTerm {
    fn default() -> Self {
        FreightTerm::Cif
    }
}

// =============================================================================
// Order Mode
// =============================================================================

/// Direct sale vs. industrialization (subcontracted manufacturing).
///
/// Industrialization orders are a tax-exempt pass-through: no IPI, no ST,
/// final value equals the gross value. This short-circuit is absolute and
/// runs before any product-specific exemption logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum OrderMode {
    #[serde(rename = "Direta")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Direta"))]
    Direta,
    #[serde(rename = "Industrialização")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Industrialização"))]
    Industrializacao,
}

impl OrderMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderMode::Direta => "Direta",
            OrderMode::Industrializacao => "Industrialização",
        }
    }

    /// True for the tax-exempt pass-through mode.
    #[inline]
    pub const fn is_tax_exempt(&self) -> bool {
        matches!(self, OrderMode::Industrializacao)
    }
}

impl Default for OrderMode {
    fn default() -> Self {
        OrderMode::Direta
    }
}

// =============================================================================
// Quote Header
// =============================================================================

/// Everything on a quote except its identity and its item lists.
///
/// This is the shape a draft carries before submission; the repository turns
/// it into a [`Quote`] by assigning the sequential id and the creation
/// timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteHeader {
    /// Client legal or trade name.
    pub client_name: String,

    /// CNPJ or CPF, free text, optional.
    pub client_tax_id: String,

    /// Tax category of the client.
    pub client_kind: ClientKind,

    /// Two-letter state code of the client (e.g. "SP").
    /// Unknown codes are legal and simply fall back to default tax rates.
    pub state: String,

    /// Freight term (CIF/FOB).
    pub freight: FreightTerm,

    /// Direct sale or industrialization.
    pub order_mode: OrderMode,

    /// Seller name shown on the document.
    pub seller_name: String,

    /// Seller phone.
    pub seller_phone: String,

    /// Seller e-mail.
    pub seller_email: String,

    /// Free-text note printed on the document.
    pub note: String,

    /// Order-wide unit price: R$ per m² for made items, R$ per linear meter
    /// for roll items. Items may override it individually.
    pub base_price: f64,
}

// =============================================================================
// Quote
// =============================================================================

/// A persisted quote. Immutable once stored; there is no update path, only
/// delete. Reopening a past quote reconstructs a draft that submits as a
/// NEW quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Quote {
    /// Auto-assigned sequential identifier.
    pub id: i64,

    /// When the quote was submitted.
    pub created_at: DateTime<Utc>,

    pub client_name: String,
    pub client_tax_id: String,
    pub client_kind: ClientKind,
    pub state: String,
    pub freight: FreightTerm,
    pub order_mode: OrderMode,
    pub seller_name: String,
    pub seller_phone: String,
    pub seller_email: String,
    pub note: String,
    pub base_price: f64,
}

impl Quote {
    /// The header view of this quote, for re-drafting.
    pub fn header(&self) -> QuoteHeader {
        QuoteHeader {
            client_name: self.client_name.clone(),
            client_tax_id: self.client_tax_id.clone(),
            client_kind: self.client_kind,
            state: self.state.clone(),
            freight: self.freight,
            order_mode: self.order_mode,
            seller_name: self.seller_name.clone(),
            seller_phone: self.seller_phone.clone(),
            seller_email: self.seller_email.clone(),
            note: self.note.clone(),
            base_price: self.base_price,
        }
    }
}

// =============================================================================
// Quote Summary
// =============================================================================

/// One row of the quote history listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct QuoteSummary {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub seller_name: String,
}

// =============================================================================
// Made Item
// =============================================================================

/// A confectioned (cut-to-order) line item, priced by area.
///
/// Invariants (enforced at draft time, assumed by the aggregator):
/// length > 0, width > 0, quantity ≥ 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MadeItem {
    /// Product name; unknown names are allowed and never match exemptions.
    pub product: String,

    /// Length in meters.
    pub length_m: f64,

    /// Width in meters.
    pub width_m: f64,

    /// Number of pieces.
    pub quantity: i64,

    /// Color, free text.
    pub color: String,

    /// Per-item price override (R$/m²). Falls back to the quote's
    /// base price when absent.
    pub unit_price: Option<f64>,
}

impl MadeItem {
    /// Total area of this line: length × width × quantity.
    #[inline]
    pub fn area(&self) -> f64 {
        self.length_m * self.width_m * self.quantity as f64
    }

    /// Price actually used for this line.
    #[inline]
    pub fn effective_price(&self, base_price: f64) -> f64 {
        self.unit_price.unwrap_or(base_price)
    }

    /// Gross value of this line (area × effective price). No rounding.
    #[inline]
    pub fn gross(&self, base_price: f64) -> f64 {
        self.area() * self.effective_price(base_price)
    }
}

// =============================================================================
// Roll Item
// =============================================================================

/// A bulk roll line item, priced by linear meter.
///
/// The roll width is informational (it appears on the document) and never
/// enters the valuation. Thickness is required only for products whose name
/// starts with one of [`crate::catalog::THICKNESS_PREFIXES`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RollItem {
    pub product: String,

    /// Roll length in meters.
    pub length_m: f64,

    /// Roll width in meters (display only).
    pub width_m: f64,

    /// Number of rolls.
    pub quantity: i64,

    /// Color, free text.
    pub color: String,

    /// Thickness in millimeters, when the product family carries one.
    pub thickness_mm: Option<f64>,

    /// Per-item price override (R$/linear meter). Falls back to the
    /// quote's base price when absent.
    pub unit_price: Option<f64>,
}

impl RollItem {
    /// Linear meters of this line: length × quantity.
    #[inline]
    pub fn linear_meters(&self) -> f64 {
        self.length_m * self.quantity as f64
    }

    /// Price actually used for this line.
    #[inline]
    pub fn effective_price(&self, base_price: f64) -> f64 {
        self.unit_price.unwrap_or(base_price)
    }

    /// Gross value of this line (linear meters × effective price).
    #[inline]
    pub fn gross(&self, base_price: f64) -> f64 {
        self.linear_meters() * self.effective_price(base_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_made_item_area_and_gross() {
        let item = MadeItem {
            product: "Lonil de PVC".to_string(),
            length_m: 2.0,
            width_m: 1.5,
            quantity: 3,
            color: String::new(),
            unit_price: None,
        };
        assert_eq!(item.area(), 9.0);
        assert_eq!(item.gross(10.0), 90.0);
    }

    #[test]
    fn test_made_item_price_override() {
        let item = MadeItem {
            product: "Duramax".to_string(),
            length_m: 1.0,
            width_m: 1.0,
            quantity: 1,
            color: String::new(),
            unit_price: Some(25.0),
        };
        assert_eq!(item.effective_price(10.0), 25.0);
        assert_eq!(item.gross(10.0), 25.0);
    }

    #[test]
    fn test_roll_item_linear_meters() {
        let item = RollItem {
            product: "Capota Marítima".to_string(),
            length_m: 10.0,
            width_m: 1.4,
            quantity: 2,
            color: String::new(),
            thickness_mm: None,
            unit_price: None,
        };
        assert_eq!(item.linear_meters(), 20.0);
        assert_eq!(item.gross(20.0), 400.0);
    }

    #[test]
    fn test_enum_display_strings() {
        assert_eq!(ClientKind::Revenda.as_str(), "Revenda");
        assert_eq!(FreightTerm::Fob.as_str(), "FOB");
        assert_eq!(OrderMode::Industrializacao.as_str(), "Industrialização");
        assert!(OrderMode::Industrializacao.is_tax_exempt());
        assert!(!OrderMode::Direta.is_tax_exempt());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ClientKind::default(), ClientKind::ConsumidorFinal);
        assert_eq!(FreightTerm::default(), FreightTerm::Cif);
        assert_eq!(OrderMode::default(), OrderMode::Direta);
    }

    #[test]
    fn test_quote_header_roundtrip() {
        let quote = Quote {
            id: 7,
            created_at: Utc::now(),
            client_name: "Transportes Andrade".to_string(),
            client_tax_id: "12.345.678/0001-00".to_string(),
            client_kind: ClientKind::Revenda,
            state: "SP".to_string(),
            freight: FreightTerm::Fob,
            order_mode: OrderMode::Direta,
            seller_name: "Paula".to_string(),
            seller_phone: "(11) 99999-0000".to_string(),
            seller_email: "paula@example.com".to_string(),
            note: "Entrega em 10 dias".to_string(),
            base_price: 32.5,
        };
        let header = quote.header();
        assert_eq!(header.client_name, quote.client_name);
        assert_eq!(header.client_kind, ClientKind::Revenda);
        assert_eq!(header.base_price, 32.5);
    }
}
