//! PMC OAI-PMH Search - keyword and year search over PubMed Central metadata.
//!
//! The PMC OAI-PMH endpoint only supports bulk metadata harvesting, not
//! keyword search. This crate harvests ListRecords pages from the endpoint,
//! extracts flat bibliographic records, filters them locally by title
//! keywords and publication year, and exports the matches.
//!
//! # Example
//!
//! ```
//! use pmc_oai_search::config;
//!
//! // Validate user inputs before harvesting
//! assert!(config::validate_max_records(100).is_ok());
//! assert!(config::validate_year_range(2000, 2025).is_ok());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Endpoint constants, input validation, URL builders
//! - [`types`]: Core data types (RawRecord, SearchParams)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for the OAI-PMH endpoint
//! - [`oai`]: ListRecords response parsing
//! - [`harvester`]: Pagination loop and search pipeline
//! - [`filter`]: Local title and year filtering
//! - [`export`]: CSV and XLSX output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod harvester;
pub mod http;
pub mod oai;
pub mod types;

// Re-export main functions
pub use harvester::{harvest, search};

// Re-export commonly used items
pub use error::{HarvestError, Result};
pub use types::{RawRecord, SearchParams};
