//! Document-layer error types.

use thiserror::Error;

/// Document generation errors.
///
/// These wrap the underlying writer libraries. A failure here is surfaced
/// to the operator; the quote itself is already stored by the time a
/// document is rendered.
#[derive(Debug, Error)]
pub enum DocError {
    /// PDF writer failure.
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// XLSX writer failure.
    #[error("Spreadsheet generation failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl DocError {
    /// Wraps a PDF writer error with its message.
    pub fn pdf(err: impl std::fmt::Display) -> Self {
        DocError::Pdf(err.to_string())
    }
}

/// Result type for document operations.
pub type DocResult<T> = Result<T, DocError>;
