//! Core data types for the search tool.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_RECORDS, MAX_YEAR};

/// One harvested bibliographic record from the OAI-PMH feed.
///
/// Immutable once constructed; each record corresponds to exactly one
/// harvested `record` element. Records live only in memory for the duration
/// of a single search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Title text; multiple title values are joined with "; ". May be empty.
    pub title: String,

    /// Author names; multiple creator values are joined with "; ". May be empty.
    pub authors: String,

    /// Publication year extracted from the first date value, if any 4-digit
    /// sequence was found in it.
    pub year: Option<u16>,

    /// PMC identifier (starts with "PMC"), if present among the record's
    /// identifiers.
    pub pmcid: Option<String>,

    /// DOI (starts with "10."), if present among the record's identifiers.
    pub doi: Option<String>,
}

impl RawRecord {
    /// Project the record onto the export column order:
    /// Title, Authors, Year, PMCID, DOI.
    ///
    /// The table renderer and both export writers share this projection so
    /// they emit identical field values.
    #[must_use]
    pub fn field_values(&self) -> [String; 5] {
        [
            self.title.clone(),
            self.authors.clone(),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.pmcid.clone().unwrap_or_default(),
            self.doi.clone().unwrap_or_default(),
        ]
    }
}

/// Resolved user inputs for one search invocation.
///
/// The pipeline is a pure function of these values aside from network I/O;
/// there is no process-wide mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query; whitespace-delimited words are matched as
    /// case-insensitive substrings of the title.
    pub query: String,

    /// Inclusive lower bound of the publication year range.
    pub from_year: u16,

    /// Inclusive upper bound of the publication year range.
    pub to_year: u16,

    /// Maximum number of records to harvest before filtering.
    pub max_records: usize,
}

impl SearchParams {
    /// Create search parameters with the default year range and record budget.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            from_year: 2000,
            to_year: MAX_YEAR,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}
