//! # History Export
//!
//! Builds the one-row-per-quote XLSX report for the history page.
//!
//! The caller supplies already-computed final totals (the pricing engine
//! runs upstream); this module only lays rows out.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use lona_core::{MadeItem, MadeTotals, Quote, RollItem, RollTotals};

use crate::error::DocResult;

/// One exported row: the persisted quote plus its computed final total.
#[derive(Debug, Clone)]
pub struct QuoteExportRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub client_tax_id: String,
    pub client_kind: String,
    pub state: String,
    pub order_mode: String,
    /// Representative product (first line item), as on the old reports.
    pub product: String,
    pub base_price: f64,
    /// Computed grand total across both sections.
    pub final_total: f64,
    pub freight: String,
    pub seller_name: String,
    pub note: String,
}

impl QuoteExportRow {
    /// Assembles a row from a stored quote graph and its aggregator results.
    pub fn from_quote(
        quote: &Quote,
        made_items: &[MadeItem],
        roll_items: &[RollItem],
        made_totals: &MadeTotals,
        roll_totals: &RollTotals,
    ) -> Self {
        let product = made_items
            .first()
            .map(|item| item.product.clone())
            .or_else(|| roll_items.first().map(|item| item.product.clone()))
            .unwrap_or_default();

        QuoteExportRow {
            id: quote.id,
            created_at: quote.created_at,
            client_name: quote.client_name.clone(),
            client_tax_id: quote.client_tax_id.clone(),
            client_kind: quote.client_kind.as_str().to_string(),
            state: quote.state.clone(),
            order_mode: quote.order_mode.as_str().to_string(),
            product,
            base_price: quote.base_price,
            final_total: made_totals.final_total + roll_totals.final_total,
            freight: quote.freight.as_str().to_string(),
            seller_name: quote.seller_name.clone(),
            note: quote.note.clone(),
        }
    }
}

/// Column headers, in sheet order.
const HEADERS: &[&str] = &[
    "ID",
    "Data",
    "Cliente",
    "CNPJ/CPF",
    "Tipo Cliente",
    "Estado",
    "Tipo Pedido",
    "Nome do Produto",
    "Preço m²/metro linear",
    "Valor Final",
    "Frete",
    "Vendedor Nome",
    "Observações",
];

/// Writes the report workbook and returns the XLSX bytes.
pub fn export_quotes(rows: &[QuoteExportRow]) -> DocResult<Vec<u8>> {
    debug!(rows = rows.len(), "Exporting quote history");

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Orçamentos")?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        worksheet.write_number(r, 0, row.id as f64)?;
        worksheet.write_string(r, 1, row.created_at.format("%d/%m/%Y %H:%M").to_string())?;
        worksheet.write_string(r, 2, &row.client_name)?;
        worksheet.write_string(r, 3, &row.client_tax_id)?;
        worksheet.write_string(r, 4, &row.client_kind)?;
        worksheet.write_string(r, 5, &row.state)?;
        worksheet.write_string(r, 6, &row.order_mode)?;
        worksheet.write_string(r, 7, &row.product)?;
        worksheet.write_number(r, 8, row.base_price)?;
        worksheet.write_number(r, 9, row.final_total)?;
        worksheet.write_string(r, 10, &row.freight)?;
        worksheet.write_string(r, 11, &row.seller_name)?;
        worksheet.write_string(r, 12, &row.note)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(size = bytes.len(), "Quote history exported");
    Ok(bytes)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lona_core::pricing::{price_made_items, price_roll_items};
    use lona_core::{ClientKind, FreightTerm, OrderMode, TaxTables};

    fn sample_quote() -> (Quote, Vec<MadeItem>, Vec<RollItem>) {
        let quote = Quote {
            id: 1,
            created_at: Utc::now(),
            client_name: "Transportes Andrade".to_string(),
            client_tax_id: "12.345.678/0001-00".to_string(),
            client_kind: ClientKind::Revenda,
            state: "SP".to_string(),
            freight: FreightTerm::Cif,
            order_mode: OrderMode::Direta,
            seller_name: "Paula".to_string(),
            seller_phone: String::new(),
            seller_email: String::new(),
            note: String::new(),
            base_price: 100.0,
        };
        let made = vec![MadeItem {
            product: "Encerado".to_string(),
            length_m: 1.0,
            width_m: 1.0,
            quantity: 1,
            color: String::new(),
            unit_price: None,
        }];
        (quote, made, Vec::new())
    }

    #[test]
    fn test_row_assembly_totals_both_sections() {
        let (quote, made, rolls) = sample_quote();
        let made_totals = price_made_items(&made, &quote.header(), &TaxTables::new());
        let roll_totals = price_roll_items(&rolls, &quote.header());

        let row = QuoteExportRow::from_quote(&quote, &made, &rolls, &made_totals, &roll_totals);
        assert_eq!(row.product, "Encerado");
        assert_eq!(row.client_kind, "Revenda");
        // Encerado for a SP reseller: 100 + 3.25 IPI + 14% ST
        assert!((row.final_total - 117.705).abs() < 1e-9);
    }

    #[test]
    fn test_export_produces_xlsx_bytes() {
        let (quote, made, rolls) = sample_quote();
        let made_totals = price_made_items(&made, &quote.header(), &TaxTables::new());
        let roll_totals = price_roll_items(&rolls, &quote.header());
        let row = QuoteExportRow::from_quote(&quote, &made, &rolls, &made_totals, &roll_totals);

        let bytes = export_quotes(&[row]).unwrap();
        // XLSX is a ZIP container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_empty_history() {
        let bytes = export_quotes(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
