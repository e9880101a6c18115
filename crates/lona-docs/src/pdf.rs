//! # Quote Document Renderer
//!
//! Renders a submitted quote as the printable PDF the client receives.
//!
//! ## Document Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Orçamento - Grupo Locomotiva                           │
//! │                                                                         │
//! │  Orçamento ID / Data e Hora / Validade                                 │
//! │                                                                         │
//! │  Cliente                                                               │
//! │    Nome, CNPJ, Tipo, Estado, Frete, Tipo Pedido (blank lines skipped)  │
//! │                                                                         │
//! │  Itens Confeccionados          Resumo - Confeccionados                 │
//! │    qty × product, dims, color    preço/m², área, bruto, IPI, ST, total │
//! │                                                                         │
//! │  Itens Bobina                  Resumo - Bobinas                        │
//! │    qty × product, largura,       metros lineares, bruto, IPI, total    │
//! │    esp, preço metro                                                     │
//! │                                                                         │
//! │  Observações                                                           │
//! │  Vendedor / Telefone / E-mail                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every monetary amount comes from the aggregator results carried in the
//! [`QuoteSubmission`]; this module formats, it never recomputes tax. The
//! only arithmetic here is per-line valuation for the item listings, which
//! delegates to the item methods themselves.

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference};
use tracing::debug;

use lona_core::format::{format_brl, format_measure};
use lona_core::{QuoteSubmission, QUOTE_VALIDITY_DAYS};

use crate::error::{DocError, DocResult};

// A4 portrait
const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_LEFT: Mm = Mm(15.0);
const TOP_START: Mm = Mm(280.0);
const BOTTOM_LIMIT: Mm = Mm(20.0);

/// Renders the quote document and returns the PDF bytes.
///
/// `quote_id` is the stored identifier printed on the document and
/// `issued_at` the timestamp shown on the date line.
pub fn render_quote(
    quote_id: i64,
    issued_at: DateTime<Utc>,
    submission: &QuoteSubmission,
) -> DocResult<Vec<u8>> {
    debug!(quote_id, "Rendering quote document");

    let (doc, page, layer) = printpdf::PdfDocument::new(
        "Orçamento - Grupo Locomotiva",
        PAGE_WIDTH,
        PAGE_HEIGHT,
        "Camada 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(DocError::pdf)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(DocError::pdf)?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: TOP_START,
        regular,
        bold,
    };
    write_document(&mut writer, quote_id, issued_at, submission);
    drop(writer);

    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut buf = std::io::BufWriter::new(&mut bytes);
        doc.save(&mut buf).map_err(DocError::pdf)?;
    }

    debug!(quote_id, size = bytes.len(), "Quote document rendered");
    Ok(bytes)
}

fn write_document(
    writer: &mut PageWriter<'_>,
    quote_id: i64,
    issued_at: DateTime<Utc>,
    submission: &QuoteSubmission,
) {
    // Cabeçalho
    writer.heading_centered("Orçamento - Grupo Locomotiva", 14.0);
    writer.space(Mm(6.0));
    writer.line(&format!("Orçamento ID: {quote_id}"), 9.0);
    writer.line(
        &format!("Data e Hora: {}", issued_at.format("%d/%m/%Y %H:%M")),
        9.0,
    );
    writer.line(
        &format!("Validade da Cotação: {QUOTE_VALIDITY_DAYS} dias corridos."),
        9.0,
    );
    writer.space(Mm(4.0));

    // Dados do Cliente
    let header = &submission.header;
    writer.heading("Cliente", 11.0);
    for (label, value) in [
        ("Nome", header.client_name.clone()),
        ("Cnpj", header.client_tax_id.clone()),
        ("Tipo Cliente", header.client_kind.as_str().to_string()),
        ("Estado", header.state.clone()),
        ("Frete", header.freight.as_str().to_string()),
        ("Tipo Pedido", header.order_mode.as_str().to_string()),
    ] {
        if !value.trim().is_empty() {
            writer.line(&format!("{label}: {value}"), 10.0);
        }
    }
    writer.space(Mm(5.0));

    // Itens Confeccionados
    if !submission.made_items.is_empty() {
        writer.heading("Itens Confeccionados", 11.0);
        for item in &submission.made_items {
            writer.line(
                &format!(
                    "{}x {} - {}m x {}m | Cor: {} | Valor Bruto: {}",
                    item.quantity,
                    item.product,
                    format_measure(item.length_m),
                    format_measure(item.width_m),
                    item.color,
                    format_brl(item.gross(header.base_price)),
                ),
                8.0,
            );
        }

        // Resumo Confeccionados
        let totals = &submission.made_totals;
        writer.space(Mm(3.0));
        writer.heading("Resumo - Confeccionados", 11.0);
        writer.line(
            &format!("Preço por m² utilizado: {}", format_brl(header.base_price)),
            10.0,
        );
        writer.line(
            &format!("Área Total: {} m²", format_measure(totals.area_total)),
            10.0,
        );
        writer.line(
            &format!("Valor Bruto: {}", format_brl(totals.gross_total)),
            10.0,
        );
        if totals.ipi_total > 0.0 {
            writer.line(&format!("IPI: {}", format_brl(totals.ipi_total)), 10.0);
        }
        if totals.st_value > 0.0 {
            writer.line(
                &format!(
                    "ST ({}%): {}",
                    rate_str(totals.st_rate),
                    format_brl(totals.st_value)
                ),
                10.0,
            );
        }
        writer.bold_line(&format!("Valor Total: {}", format_brl(totals.final_total)), 10.0);
        writer.space(Mm(8.0));
    }

    // Itens Bobina
    if !submission.roll_items.is_empty() {
        writer.heading("Itens Bobina", 11.0);
        for item in &submission.roll_items {
            let mut text = format!(
                "{}x {} - {}m | Largura: {}m | Cor: {} | Valor Bruto: {}",
                item.quantity,
                item.product,
                format_measure(item.length_m),
                format_measure(item.width_m),
                item.color,
                format_brl(item.gross(header.base_price)),
            );
            if let Some(thickness) = item.thickness_mm {
                text.push_str(&format!(
                    " | Esp: {} mm | Preço metro: {}",
                    format_measure(thickness),
                    format_brl(item.effective_price(header.base_price)),
                ));
            }
            writer.line(&text, 8.0);
        }

        // Resumo Bobinas
        let totals = &submission.roll_totals;
        writer.space(Mm(3.0));
        writer.heading("Resumo - Bobinas", 11.0);
        writer.line(
            &format!(
                "Total de Metros Lineares: {} m",
                format_measure(totals.linear_total)
            ),
            10.0,
        );
        writer.line(
            &format!("Valor Bruto: {}", format_brl(totals.gross_total)),
            10.0,
        );
        if totals.ipi_total > 0.0 {
            writer.line(
                &format!(
                    "IPI ({}%): {}",
                    rate_str(totals.ipi_rate * 100.0),
                    format_brl(totals.ipi_total)
                ),
                10.0,
            );
        }
        writer.bold_line(&format!("Valor Total: {}", format_brl(totals.final_total)), 10.0);
        writer.space(Mm(8.0));
    }

    // Observações
    if !header.note.trim().is_empty() {
        writer.heading("Observações", 11.0);
        for note_line in header.note.lines() {
            writer.line(note_line, 10.0);
        }
        writer.space(Mm(8.0));
    }

    // Vendedor
    if !header.seller_name.trim().is_empty()
        || !header.seller_phone.trim().is_empty()
        || !header.seller_email.trim().is_empty()
    {
        writer.line(&format!("Vendedor: {}", header.seller_name), 10.0);
        writer.line(&format!("Telefone: {}", header.seller_phone), 10.0);
        writer.line(&format!("E-mail: {}", header.seller_email), 10.0);
    }
}

/// Percent rate for display: whole rates print bare ("14"), fractional
/// rates keep two comma decimals ("3,25").
fn rate_str(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format_measure(rate)
    }
}

// =============================================================================
// Page Writer
// =============================================================================

/// Cursor-based line writer with automatic page breaks.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PageWriter<'_> {
    /// Starts a new page when the cursor ran past the bottom margin.
    fn ensure_space(&mut self, needed: Mm) {
        if self.y.0 - needed.0 < BOTTOM_LIMIT.0 {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Camada 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_START;
        }
    }

    fn write(&mut self, text: &str, size: f64, font: &IndirectFontRef, advance: Mm) {
        self.ensure_space(advance);
        self.layer.use_text(text, size as f32, MARGIN_LEFT, self.y, font);
        self.y = Mm(self.y.0 - advance.0);
    }

    /// Regular body line.
    fn line(&mut self, text: &str, size: f64) {
        let font = self.regular.clone();
        self.write(text, size, &font, Mm(5.0));
    }

    /// Bold body line (totals).
    fn bold_line(&mut self, text: &str, size: f64) {
        let font = self.bold.clone();
        self.write(text, size, &font, Mm(5.0));
    }

    /// Bold section heading.
    fn heading(&mut self, text: &str, size: f64) {
        let font = self.bold.clone();
        self.write(text, size, &font, Mm(7.0));
    }

    /// Title line, visually centered on the page.
    fn heading_centered(&mut self, text: &str, size: f64) {
        self.ensure_space(Mm(10.0));
        // Rough centering for the built-in font: average glyph width is
        // close to half the font size in points (0.353 mm/pt).
        let approx_width = 0.353 * size * 0.5 * text.chars().count() as f64;
        let x = Mm((PAGE_WIDTH.0 - approx_width as f32) / 2.0);
        let font = self.bold.clone();
        self.layer.use_text(text, size as f32, x, self.y, &font);
        self.y = Mm(self.y.0 - 10.0);
    }

    /// Vertical gap.
    fn space(&mut self, gap: Mm) {
        self.y = Mm(self.y.0 - gap.0);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
