//! # Quote Pricing Engine
//!
//! Pure functions that turn a list of line items plus the order context into
//! taxed monetary totals.
//!
//! ## Calculation Order (made items)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Made-Item Aggregation                                │
//! │                                                                         │
//! │  items ──► Σ area, Σ gross                                             │
//! │       │                                                                 │
//! │       ├── Industrialização? ──► final = gross (STOP, no tax at all)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  per-item IPI (3.25%, exempt products 0%) ──► Σ ipi                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  final = gross + ipi                                                   │
//! │       │                                                                 │
//! │       ├── "Encerado" present AND client = Revenda?                     │
//! │       │        st = final × ST[state] / 100                            │
//! │       │        final += st                                             │
//! │       ▼                                                                 │
//! │  MadeTotals                                                            │
//! │                                                                         │
//! │  ST is computed on the POST-IPI total. The order of these steps        │
//! │  is load-bearing.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Roll items
//! Rolls take a single batch-level IPI rate instead of per-item rates:
//! 9.75% by default, 3.25% when the batch contains "Capota Marítima", 0%
//! when every item is in the exemption set (or the order is
//! industrialization). The applied rate is reported in the totals because
//! the document layer prints it.
//!
//! ## Numbers
//! All arithmetic is `f64` with no intermediate rounding; two-decimal
//! rounding is the job of [`crate::format`] at presentation time.

use serde::{Deserialize, Serialize};

use crate::tax::TaxTables;
use crate::types::{ClientKind, MadeItem, QuoteHeader, RollItem};

// =============================================================================
// Rates and exemption lists
// =============================================================================

/// IPI rate for made (confectioned) items.
pub const MADE_IPI_RATE: f64 = 0.0325;

/// Default IPI rate for roll items.
pub const ROLL_IPI_RATE: f64 = 0.0975;

/// Reduced roll IPI rate when the batch carries "Capota Marítima".
pub const ROLL_IPI_REDUCED_RATE: f64 = 0.0325;

/// Made products fully exempt from IPI, matched exactly.
const MADE_IPI_EXEMPT_EXACT: &[&str] = &["Acrylic", "Agora"];

/// Made product families fully exempt from IPI, matched by prefix.
const MADE_IPI_EXEMPT_PREFIXES: &[&str] = &["Tela de Sombreamento"];

/// Roll products exempt from IPI when the WHOLE batch consists of them.
const ROLL_IPI_EXEMPT: &[&str] = &["Acrylic", "Agora", "Tela de Sombreamento", "Encerado"];

/// The one product that triggers the reduced roll rate.
const ROLL_REDUCED_PRODUCT: &str = "Capota Marítima";

/// The one product that can trigger the ST surcharge on made items.
const ST_PRODUCT: &str = "Encerado";

/// IPI rate for a single made item. Unknown products never match an
/// exemption and get the default rate.
pub fn made_item_ipi_rate(product: &str) -> f64 {
    if MADE_IPI_EXEMPT_EXACT.contains(&product) {
        return 0.0;
    }
    if MADE_IPI_EXEMPT_PREFIXES
        .iter()
        .any(|prefix| product.starts_with(prefix))
    {
        return 0.0;
    }
    MADE_IPI_RATE
}

// =============================================================================
// Totals
// =============================================================================

/// Aggregated totals for the made-item section of a quote.
/// All zeros when the item list is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MadeTotals {
    /// Σ length × width × quantity, in m².
    pub area_total: f64,
    /// Σ per-line gross values.
    pub gross_total: f64,
    /// Σ per-line IPI amounts.
    pub ipi_total: f64,
    /// Gross + IPI + ST.
    pub final_total: f64,
    /// ST surcharge amount (0 unless triggered).
    pub st_value: f64,
    /// ST rate in percent (0 unless triggered).
    pub st_rate: f64,
}

/// Aggregated totals for the roll-item section of a quote.
/// All zeros when the item list is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RollTotals {
    /// Σ length × quantity, in linear meters.
    pub linear_total: f64,
    /// Σ per-line gross values.
    pub gross_total: f64,
    /// gross × applied rate.
    pub ipi_total: f64,
    /// Gross + IPI.
    pub final_total: f64,
    /// The batch IPI rate actually applied (0.0, 0.0325 or 0.0975).
    pub ipi_rate: f64,
}

// =============================================================================
// Aggregators
// =============================================================================

/// Prices the made-item section of a quote.
///
/// ## Example
/// ```rust
/// use lona_core::pricing::price_made_items;
/// use lona_core::tax::TaxTables;
/// use lona_core::types::{MadeItem, QuoteHeader};
///
/// let header = QuoteHeader {
///     base_price: 10.0,
///     ..QuoteHeader::default()
/// };
/// let items = vec![MadeItem {
///     product: "Lonil de PVC".to_string(),
///     length_m: 2.0,
///     width_m: 1.5,
///     quantity: 3,
///     color: String::new(),
///     unit_price: None,
/// }];
///
/// let totals = price_made_items(&items, &header, &TaxTables::new());
/// assert_eq!(totals.area_total, 9.0);
/// assert_eq!(totals.gross_total, 90.0);
/// ```
pub fn price_made_items(
    items: &[MadeItem],
    header: &QuoteHeader,
    tables: &TaxTables,
) -> MadeTotals {
    if items.is_empty() {
        return MadeTotals::default();
    }

    let area_total: f64 = items.iter().map(MadeItem::area).sum();
    let gross_total: f64 = items
        .iter()
        .map(|item| item.gross(header.base_price))
        .sum();

    // Industrialization is an absolute short-circuit: no IPI, no ST,
    // no product-specific exemption logic.
    if header.order_mode.is_tax_exempt() {
        return MadeTotals {
            area_total,
            gross_total,
            final_total: gross_total,
            ..MadeTotals::default()
        };
    }

    let ipi_total: f64 = items
        .iter()
        .map(|item| item.gross(header.base_price) * made_item_ipi_rate(&item.product))
        .sum();
    let mut final_total = gross_total + ipi_total;

    // ST applies to the POST-IPI total, only for resale orders that carry
    // the substitution-tax product.
    let mut st_value = 0.0;
    let mut st_rate = 0.0;
    let has_st_product = items.iter().any(|item| item.product == ST_PRODUCT);
    if has_st_product && header.client_kind == ClientKind::Revenda {
        st_rate = tables.st_rate(&header.state);
        st_value = final_total * st_rate / 100.0;
        final_total += st_value;
    }

    MadeTotals {
        area_total,
        gross_total,
        ipi_total,
        final_total,
        st_value,
        st_rate,
    }
}

/// Prices the roll-item section of a quote.
///
/// The IPI rate is decided once for the whole batch:
/// 1. Industrialization order ⇒ 0.
/// 2. Every item in the exemption set ⇒ 0.
/// 3. Any item is "Capota Marítima" ⇒ 3.25%.
/// 4. Otherwise 9.75%.
pub fn price_roll_items(items: &[RollItem], header: &QuoteHeader) -> RollTotals {
    if items.is_empty() {
        return RollTotals::default();
    }

    let linear_total: f64 = items.iter().map(RollItem::linear_meters).sum();
    let gross_total: f64 = items
        .iter()
        .map(|item| item.gross(header.base_price))
        .sum();

    let ipi_rate = roll_batch_ipi_rate(items, header);
    let ipi_total = gross_total * ipi_rate;

    RollTotals {
        linear_total,
        gross_total,
        ipi_total,
        final_total: gross_total + ipi_total,
        ipi_rate,
    }
}

fn roll_batch_ipi_rate(items: &[RollItem], header: &QuoteHeader) -> f64 {
    if header.order_mode.is_tax_exempt() {
        return 0.0;
    }
    if items
        .iter()
        .all(|item| ROLL_IPI_EXEMPT.contains(&item.product.as_str()))
    {
        return 0.0;
    }
    if items.iter().any(|item| item.product == ROLL_REDUCED_PRODUCT) {
        return ROLL_IPI_REDUCED_RATE;
    }
    ROLL_IPI_RATE
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FreightTerm, OrderMode};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn made(product: &str, length: f64, width: f64, qty: i64) -> MadeItem {
        MadeItem {
            product: product.to_string(),
            length_m: length,
            width_m: width,
            quantity: qty,
            color: String::new(),
            unit_price: None,
        }
    }

    fn roll(product: &str, length: f64, qty: i64) -> RollItem {
        RollItem {
            product: product.to_string(),
            length_m: length,
            width_m: 1.4,
            quantity: qty,
            color: String::new(),
            thickness_mm: None,
            unit_price: None,
        }
    }

    fn header(base_price: f64, kind: ClientKind, state: &str, mode: OrderMode) -> QuoteHeader {
        QuoteHeader {
            client_name: "Cliente".to_string(),
            client_tax_id: String::new(),
            client_kind: kind,
            state: state.to_string(),
            freight: FreightTerm::Cif,
            order_mode: mode,
            seller_name: String::new(),
            seller_phone: String::new(),
            seller_email: String::new(),
            note: String::new(),
            base_price,
        }
    }

    // -------------------------------------------------------------------------
    // Made items
    // -------------------------------------------------------------------------

    #[test]
    fn test_made_direct_sale_lonil() {
        // 3 pieces of 2m × 1.5m Lonil at R$ 10/m²:
        // area 9 m², gross 90, IPI 2.925, final 92.925, no ST
        let ctx = header(10.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let items = vec![made("Lonil de PVC", 2.0, 1.5, 3)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.area_total, 9.0);
        assert_eq!(totals.gross_total, 90.0);
        assert!(approx(totals.ipi_total, 2.925));
        assert!(approx(totals.final_total, 92.925));
        assert_eq!(totals.st_value, 0.0);
        assert_eq!(totals.st_rate, 0.0);
    }

    #[test]
    fn test_made_encerado_resale_triggers_st() {
        // Encerado 1m² at R$ 100 for a SP reseller:
        // gross 100, IPI 3.25, post-IPI 103.25, ST 14% = 14.455, final 117.705
        let ctx = header(100.0, ClientKind::Revenda, "SP", OrderMode::Direta);
        let items = vec![made("Encerado", 1.0, 1.0, 1)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.gross_total, 100.0);
        assert!(approx(totals.ipi_total, 3.25));
        assert_eq!(totals.st_rate, 14.0);
        assert!(approx(totals.st_value, 14.455));
        assert!(approx(totals.final_total, 117.705));
    }

    #[test]
    fn test_made_encerado_end_consumer_no_st() {
        let ctx = header(100.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let items = vec![made("Encerado", 1.0, 1.0, 1)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.st_value, 0.0);
        assert_eq!(totals.st_rate, 0.0);
        assert!(approx(totals.final_total, 103.25));
    }

    #[test]
    fn test_made_st_needs_encerado_present() {
        // Reseller in SP, but no Encerado in the list: no ST
        let ctx = header(10.0, ClientKind::Revenda, "SP", OrderMode::Direta);
        let items = vec![made("Duramax", 2.0, 2.0, 1)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.st_value, 0.0);
        assert_eq!(totals.st_rate, 0.0);
    }

    #[test]
    fn test_made_st_zero_rate_state() {
        // SC has an explicit 0% ST entry: surcharge triggers but adds nothing
        let ctx = header(100.0, ClientKind::Revenda, "SC", OrderMode::Direta);
        let items = vec![made("Encerado", 1.0, 1.0, 1)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.st_rate, 0.0);
        assert_eq!(totals.st_value, 0.0);
        assert!(approx(totals.final_total, 103.25));
    }

    #[test]
    fn test_made_industrialization_short_circuits() {
        // Even with Encerado + Revenda + SP, industrialization means
        // final == gross and nothing else
        let ctx = header(100.0, ClientKind::Revenda, "SP", OrderMode::Industrializacao);
        let items = vec![made("Encerado", 1.0, 1.0, 1)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.gross_total, 100.0);
        assert_eq!(totals.final_total, 100.0);
        assert_eq!(totals.ipi_total, 0.0);
        assert_eq!(totals.st_value, 0.0);
        assert_eq!(totals.st_rate, 0.0);
    }

    #[test]
    fn test_made_ipi_exemptions() {
        assert_eq!(made_item_ipi_rate("Acrylic"), 0.0);
        assert_eq!(made_item_ipi_rate("Agora"), 0.0);
        assert_eq!(made_item_ipi_rate("Tela de Sombreamento 50%"), 0.0);
        assert_eq!(made_item_ipi_rate("Encerado"), MADE_IPI_RATE);
        // Unknown or blank products fail every match and take the default
        assert_eq!(made_item_ipi_rate("Produto Novo"), MADE_IPI_RATE);
        assert_eq!(made_item_ipi_rate(""), MADE_IPI_RATE);
    }

    #[test]
    fn test_made_mixed_exempt_and_taxed() {
        // 1 m² of Acrylic (exempt) + 1 m² of Duramax (taxed) at R$ 100/m²:
        // gross 200, IPI only on the Duramax line = 3.25
        let ctx = header(100.0, ClientKind::ConsumidorFinal, "MG", OrderMode::Direta);
        let items = vec![made("Acrylic", 1.0, 1.0, 1), made("Duramax", 1.0, 1.0, 1)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.gross_total, 200.0);
        assert!(approx(totals.ipi_total, 3.25));
        assert!(approx(totals.final_total, 203.25));
    }

    #[test]
    fn test_made_per_item_price_override() {
        // Override on one line, base price on the other
        let ctx = header(10.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let mut expensive = made("Duramax", 1.0, 1.0, 1);
        expensive.unit_price = Some(50.0);
        let items = vec![expensive, made("Duramax", 1.0, 1.0, 1)];

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert_eq!(totals.gross_total, 60.0);
    }

    #[test]
    fn test_made_empty_is_all_zero() {
        let ctx = header(10.0, ClientKind::Revenda, "SP", OrderMode::Direta);
        let totals = price_made_items(&[], &ctx, &TaxTables::new());
        assert_eq!(totals, MadeTotals::default());
    }

    #[test]
    fn test_made_area_additivity() {
        let ctx = header(7.5, ClientKind::ConsumidorFinal, "BA", OrderMode::Direta);
        let items = vec![
            made("Lonil KP", 2.0, 1.0, 2),
            made("Lonaleve", 3.5, 1.2, 1),
            made("Tenda", 0.8, 0.8, 5),
        ];
        let expected_area: f64 = items.iter().map(MadeItem::area).sum();

        let totals = price_made_items(&items, &ctx, &TaxTables::new());
        assert!(approx(totals.area_total, expected_area));
    }

    // -------------------------------------------------------------------------
    // Roll items
    // -------------------------------------------------------------------------

    #[test]
    fn test_roll_capota_reduced_rate() {
        // 2 rolls of 10m Capota Marítima at R$ 20/m:
        // gross 400, rate 3.25%, IPI 13, final 413
        let ctx = header(20.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let items = vec![roll("Capota Marítima", 10.0, 2)];

        let totals = price_roll_items(&items, &ctx);
        assert_eq!(totals.linear_total, 20.0);
        assert_eq!(totals.gross_total, 400.0);
        assert_eq!(totals.ipi_rate, ROLL_IPI_REDUCED_RATE);
        assert!(approx(totals.ipi_total, 13.0));
        assert!(approx(totals.final_total, 413.0));
    }

    #[test]
    fn test_roll_default_rate() {
        let ctx = header(10.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let items = vec![roll("Lonil de PVC", 50.0, 1)];

        let totals = price_roll_items(&items, &ctx);
        assert_eq!(totals.ipi_rate, ROLL_IPI_RATE);
        assert!(approx(totals.ipi_total, 500.0 * 0.0975));
        assert!(approx(totals.final_total, 500.0 * 1.0975));
    }

    #[test]
    fn test_roll_capota_in_mixed_batch_still_reduces() {
        let ctx = header(10.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let items = vec![roll("Lonil de PVC", 10.0, 1), roll("Capota Marítima", 10.0, 1)];

        let totals = price_roll_items(&items, &ctx);
        assert_eq!(totals.ipi_rate, ROLL_IPI_REDUCED_RATE);
    }

    #[test]
    fn test_roll_all_exempt_batch_is_zero_rated() {
        let ctx = header(10.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let items = vec![roll("Acrylic", 10.0, 1), roll("Encerado", 5.0, 2)];

        let totals = price_roll_items(&items, &ctx);
        assert_eq!(totals.ipi_rate, 0.0);
        assert_eq!(totals.ipi_total, 0.0);
        assert_eq!(totals.final_total, totals.gross_total);
    }

    #[test]
    fn test_roll_partially_exempt_batch_is_not() {
        // One exempt product mixed with a taxed one: default rate applies
        let ctx = header(10.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let items = vec![roll("Acrylic", 10.0, 1), roll("Duramax", 5.0, 1)];

        let totals = price_roll_items(&items, &ctx);
        assert_eq!(totals.ipi_rate, ROLL_IPI_RATE);
    }

    #[test]
    fn test_roll_industrialization() {
        let ctx = header(20.0, ClientKind::Revenda, "SP", OrderMode::Industrializacao);
        let items = vec![roll("Capota Marítima", 10.0, 2)];

        let totals = price_roll_items(&items, &ctx);
        assert_eq!(totals.ipi_rate, 0.0);
        assert_eq!(totals.ipi_total, 0.0);
        assert_eq!(totals.final_total, totals.gross_total);
        assert_eq!(totals.final_total, 400.0);
    }

    #[test]
    fn test_roll_per_item_price_override() {
        let ctx = header(10.0, ClientKind::ConsumidorFinal, "SP", OrderMode::Direta);
        let mut special = roll("Duramax", 10.0, 1);
        special.unit_price = Some(2.0);
        let items = vec![special, roll("Duramax", 10.0, 1)];

        let totals = price_roll_items(&items, &ctx);
        // 10m × R$ 2 + 10m × R$ 10
        assert!(approx(totals.gross_total, 120.0));
    }

    #[test]
    fn test_roll_empty_is_all_zero() {
        let ctx = header(10.0, ClientKind::Revenda, "SP", OrderMode::Direta);
        let totals = price_roll_items(&[], &ctx);
        assert_eq!(totals, RollTotals::default());
    }

    #[test]
    fn test_roll_linear_additivity() {
        let ctx = header(3.0, ClientKind::ConsumidorFinal, "CE", OrderMode::Direta);
        let items = vec![
            roll("Filme Liso", 100.0, 1),
            roll("Vitro 0,60", 50.0, 3),
            roll("Sunset", 25.5, 2),
        ];
        let expected: f64 = items.iter().map(RollItem::linear_meters).sum();

        let totals = price_roll_items(&items, &ctx);
        assert!(approx(totals.linear_total, expected));
    }
}
