//! Error types for the search tool.
//!
//! A harvest either succeeds completely or fails with a single error;
//! there is no partial-result salvage and no retry.

use thiserror::Error;

/// Main error type for the search library.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Maximum record count outside the allowed bounds.
    #[error("Invalid max records: {0}. Expected a value between 10 and 1000")]
    InvalidMaxRecords(usize),

    /// Year range is inverted or outside the allowed bounds.
    #[error("Invalid year range: {from}-{to}. Expected 1990 <= from <= to <= 2025")]
    InvalidYearRange { from: u16, to: u16 },

    /// HTTP request failed (network error, timeout, or non-success status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// CSV export failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX export failed.
    #[error("XLSX export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
