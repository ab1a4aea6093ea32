//! HTTP client wrapper for the OAI-PMH endpoint.
//!
//! Any transport failure aborts the current harvest: no retries, no partial
//! results. The timeout bounds each individual request, not the whole
//! multi-page harvest.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::Result;

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("pmc-oai-search/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with the per-request timeout and user agent set.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetch one XML page from a URL.
///
/// Non-success statuses (4xx/5xx) and network errors are fatal to the
/// harvest and surface as a single error to the caller.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to fetch
///
/// # Returns
/// Response body as a string
pub fn fetch_xml(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url, "Fetching OAI-PMH page");
    let response = client.get(url).send()?.error_for_status()?;
    let body = response.text()?;
    tracing::debug!(bytes = body.len(), "Fetched OAI-PMH page");
    Ok(body)
}
