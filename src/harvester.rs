//! Main harvest loop and search pipeline.

use reqwest::blocking::Client;

use crate::config::{list_records_url, resume_url, validate_max_records, validate_year_range};
use crate::error::Result;
use crate::filter::filter_records;
use crate::http::{create_client, fetch_xml};
use crate::oai::parse_list_records;
use crate::types::{RawRecord, SearchParams};

/// Harvest up to `max_records` records from an OAI-PMH endpoint.
///
/// Issues an initial ListRecords request and follows resumption tokens until
/// the endpoint stops issuing them or the record budget is reached. The
/// budget check happens per record, so the loop stops mid-batch and issues no
/// further requests once the budget is hit; a misbehaving endpoint that
/// always returns a token therefore cannot cause an infinite loop.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `base_url` - Endpoint base URL
/// * `max_records` - Record budget (should be validated by the caller)
///
/// # Returns
/// Records in harvest order, never more than `max_records`
pub fn harvest(client: &Client, base_url: &str, max_records: usize) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut url = list_records_url(base_url);
    let mut pages = 0u32;

    loop {
        let xml = fetch_xml(client, &url)?;
        let page = parse_list_records(&xml)?;
        pages += 1;

        for record in page.records {
            records.push(record);
            if records.len() >= max_records {
                tracing::info!(pages, records = records.len(), "Record budget reached");
                return Ok(records);
            }
        }

        match page.resumption_token {
            Some(token) => url = resume_url(base_url, &token),
            None => break,
        }
    }

    tracing::info!(pages, records = records.len(), "Harvest complete");
    Ok(records)
}

/// Run the full search pipeline: validate inputs, harvest, filter.
///
/// Aside from network I/O this is a pure function of its parameters; nothing
/// is retained between invocations.
///
/// # Arguments
/// * `params` - Resolved user inputs
/// * `base_url` - Endpoint base URL
///
/// # Returns
/// Matching records in harvest order
pub fn search(params: &SearchParams, base_url: &str) -> Result<Vec<RawRecord>> {
    validate_max_records(params.max_records)?;
    validate_year_range(params.from_year, params.to_year)?;

    let client = create_client()?;
    let raw = harvest(&client, base_url, params.max_records)?;

    Ok(filter_records(
        raw,
        &params.query,
        params.from_year,
        params.to_year,
    ))
}
