//! Configuration constants and validation functions for the search tool.

use crate::error::{HarvestError, Result};

/// Base URL of the PMC OAI-PMH endpoint.
pub const PMC_OAI_URL: &str = "https://pmc.ncbi.nlm.nih.gov/api/oai/v1/mh/";

/// Base URL of the PMC web search interface (used for the fallback link,
/// since OAI-PMH has no server-side keyword search).
pub const PMC_SEARCH_URL: &str = "https://www.ncbi.nlm.nih.gov/pmc/";

/// Per-request HTTP timeout in seconds.
///
/// Bounds each page request individually; the whole multi-page harvest is
/// only bounded by the record budget.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Metadata format requested from the endpoint.
pub const METADATA_PREFIX: &str = "oai_dc";

/// Minimum number of records that may be requested.
pub const MIN_RECORDS: usize = 10;

/// Maximum number of records that may be requested.
pub const MAX_RECORDS: usize = 1000;

/// Default record budget for a harvest.
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// Earliest publication year accepted in a year range.
pub const MIN_YEAR: u16 = 1990;

/// Latest publication year accepted in a year range.
pub const MAX_YEAR: u16 = 2025;

/// Validate the requested record budget.
///
/// # Examples
/// ```
/// use pmc_oai_search::config::validate_max_records;
///
/// assert!(validate_max_records(100).is_ok());
/// assert!(validate_max_records(5).is_err());
/// assert!(validate_max_records(5000).is_err());
/// ```
pub fn validate_max_records(max_records: usize) -> Result<()> {
    if (MIN_RECORDS..=MAX_RECORDS).contains(&max_records) {
        Ok(())
    } else {
        Err(HarvestError::InvalidMaxRecords(max_records))
    }
}

/// Validate an inclusive publication year range.
///
/// # Examples
/// ```
/// use pmc_oai_search::config::validate_year_range;
///
/// assert!(validate_year_range(2000, 2025).is_ok());
/// assert!(validate_year_range(2025, 2000).is_err()); // inverted
/// assert!(validate_year_range(1980, 2000).is_err()); // below bounds
/// ```
pub fn validate_year_range(from_year: u16, to_year: u16) -> Result<()> {
    if from_year <= to_year && from_year >= MIN_YEAR && to_year <= MAX_YEAR {
        Ok(())
    } else {
        Err(HarvestError::InvalidYearRange {
            from: from_year,
            to: to_year,
        })
    }
}

/// Build the initial ListRecords URL for a harvest.
pub fn list_records_url(base_url: &str) -> String {
    format!("{base_url}?verb=ListRecords&metadataPrefix={METADATA_PREFIX}")
}

/// Build the continuation URL for a resumption token.
///
/// Per the OAI-PMH protocol the token is the only parameter besides the verb.
pub fn resume_url(base_url: &str, token: &str) -> String {
    format!(
        "{base_url}?verb=ListRecords&resumptionToken={}",
        urlencoding::encode(token)
    )
}

/// Build the PMC web-search fallback URL for a free-text query.
///
/// # Examples
/// ```
/// use pmc_oai_search::config::pmc_search_url;
///
/// assert_eq!(
///     pmc_search_url("antibacterial suture"),
///     "https://www.ncbi.nlm.nih.gov/pmc/?term=antibacterial%20suture"
/// );
/// ```
pub fn pmc_search_url(query: &str) -> String {
    format!("{PMC_SEARCH_URL}?term={}", urlencoding::encode(query))
}
