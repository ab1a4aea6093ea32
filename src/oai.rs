//! OAI-PMH ListRecords response parsing.
//!
//! Responses carry an OAI-PMH protocol envelope with zero or more `record`
//! elements, each optionally wrapping a Dublin Core (`oai_dc`) payload with
//! repeatable title/creator/identifier/date children, plus an optional
//! `resumptionToken` for pagination.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::{Document, Node};

use crate::error::Result;
use crate::types::RawRecord;

/// OAI-PMH protocol envelope namespace.
pub const OAI_NS: &str = "http://www.openarchives.org/OAI/2.0/";

/// Dublin Core elements namespace (the flat metadata payload).
pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

/// Separator used when a field is multi-valued in the source.
const VALUE_SEPARATOR: &str = "; ";

/// Regex for extracting a 4-digit year from a free-form date string.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid regex"));

/// One parsed page of a ListRecords response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRecordsPage {
    /// Records in the order the endpoint yielded them.
    pub records: Vec<RawRecord>,

    /// Continuation token, if the endpoint has more pages. `None` when the
    /// token element is absent or has empty text.
    pub resumption_token: Option<String>,
}

/// Parse one ListRecords response page.
///
/// Records missing their `metadata` container or the Dublin Core payload
/// inside it are skipped silently; no placeholder entry is emitted for them.
/// Malformed XML is fatal for the whole page.
///
/// # Arguments
/// * `xml` - Raw response body
///
/// # Returns
/// Extracted records plus the continuation token, if any
pub fn parse_list_records(xml: &str) -> Result<ListRecordsPage> {
    let doc = Document::parse(xml)?;

    let mut records = Vec::new();
    for record in doc
        .descendants()
        .filter(|n| n.has_tag_name((OAI_NS, "record")))
    {
        let Some(metadata) = record
            .children()
            .find(|n| n.has_tag_name((OAI_NS, "metadata")))
        else {
            continue;
        };
        let Some(dc) = metadata
            .children()
            .find(|n| n.has_tag_name((DC_NS, "dc")))
        else {
            continue;
        };
        records.push(extract_record(dc));
    }

    let resumption_token = find_resumption_token(&doc);

    tracing::debug!(
        records = records.len(),
        has_token = resumption_token.is_some(),
        "Parsed ListRecords page"
    );

    Ok(ListRecordsPage {
        records,
        resumption_token,
    })
}

/// Extract a flat record from a Dublin Core container element.
fn extract_record(dc: Node<'_, '_>) -> RawRecord {
    let title = dc_values(dc, "title").join(VALUE_SEPARATOR);
    let authors = dc_values(dc, "creator").join(VALUE_SEPARATOR);

    // When multiple identifiers share a prefix the last one wins, matching
    // the exports produced by earlier versions of this tool.
    let mut pmcid = None;
    let mut doi = None;
    for identifier in dc_values(dc, "identifier") {
        if identifier.starts_with("PMC") {
            pmcid = Some(identifier);
        } else if identifier.starts_with("10.") {
            doi = Some(identifier);
        }
    }

    let year = dc_values(dc, "date")
        .first()
        .and_then(|date| extract_year(date));

    RawRecord {
        title,
        authors,
        year,
        pmcid,
        doi,
    }
}

/// Collect the non-empty text values of all `dc:<tag>` children, in order.
fn dc_values(dc: Node<'_, '_>, tag: &str) -> Vec<String> {
    dc.children()
        .filter(|n| n.has_tag_name((DC_NS, tag)))
        .filter_map(|n| n.text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract the first 4-digit sequence from a free-form date string.
fn extract_year(date: &str) -> Option<u16> {
    YEAR_PATTERN
        .find(date)
        .and_then(|m| m.as_str().parse().ok())
}

/// Find the resumption token, treating an empty-text token as absent.
fn find_resumption_token(doc: &Document<'_>) -> Option<String> {
    doc.descendants()
        .find(|n| n.has_tag_name((OAI_NS, "resumptionToken")))
        .and_then(|n| n.text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
