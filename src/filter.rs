//! Local keyword and year filtering of harvested records.
//!
//! The OAI-PMH endpoint cannot keyword-search server-side, so filtering
//! happens here, after the harvest. Filtering is a boolean gate applied in
//! harvest order; there is no scoring and no re-ranking.

use crate::types::RawRecord;

/// Check whether a title matches a free-text query.
///
/// The query is split into whitespace-delimited words; the title matches iff
/// it is non-empty and contains every word as a case-insensitive substring.
/// Matches inside longer words count too (not word-boundary aware).
///
/// # Examples
/// ```
/// use pmc_oai_search::filter::title_matches;
///
/// assert!(title_matches("Antibacterial sutures in surgery", "suture"));
/// assert!(title_matches("Antibacterial sutures", "SUTURE antibacterial"));
/// assert!(!title_matches("Wound healing", "suture"));
/// assert!(!title_matches("", "suture"));
/// ```
#[must_use]
pub fn title_matches(title: &str, query: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    let title = title.to_lowercase();
    query
        .split_whitespace()
        .all(|word| title.contains(&word.to_lowercase()))
}

/// Check whether a record's year falls in the inclusive range.
///
/// Records with no extractable year pass unconditionally: an unknown year is
/// never grounds for exclusion.
#[must_use]
pub fn year_in_range(year: Option<u16>, from_year: u16, to_year: u16) -> bool {
    match year {
        Some(y) => (from_year..=to_year).contains(&y),
        None => true,
    }
}

/// Keep the records satisfying both the title and the year predicate,
/// preserving harvest order.
#[must_use]
pub fn filter_records(
    records: Vec<RawRecord>,
    query: &str,
    from_year: u16,
    to_year: u16,
) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|r| title_matches(&r.title, query) && year_in_range(r.year, from_year, to_year))
        .collect()
}
