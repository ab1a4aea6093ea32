//! Command-line interface for the search tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::Table;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    self, pmc_search_url, validate_max_records, validate_year_range, DEFAULT_MAX_RECORDS,
    MAX_YEAR,
};
use crate::error::Result;
use crate::export::{save_csv, save_xlsx, EXPORT_COLUMNS};
use crate::harvester::search;
use crate::types::{RawRecord, SearchParams};

/// Display width limit for the title column.
const TITLE_DISPLAY_WIDTH: usize = 60;

/// Display width limit for the authors column.
const AUTHORS_DISPLAY_WIDTH: usize = 40;

/// Search PubMed Central by keyword and year via OAI-PMH metadata harvesting.
#[derive(Parser)]
#[command(name = "pmc-oai-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Harvest PMC metadata and filter it locally by title keywords and year.
    Search {
        /// Search keywords; every word must occur in the title
        #[arg(required = true)]
        query: Vec<String>,

        /// Earliest publication year to include (1990-2025)
        #[arg(long, default_value_t = 2000)]
        from_year: u16,

        /// Latest publication year to include (1990-2025)
        #[arg(long, default_value_t = MAX_YEAR)]
        to_year: u16,

        /// Maximum number of records to harvest (10-1000)
        #[arg(short, long, default_value_t = DEFAULT_MAX_RECORDS)]
        max_records: usize,

        /// Write the results to a CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Write the results to an XLSX file
        #[arg(long, value_name = "PATH")]
        xlsx: Option<PathBuf>,

        /// OAI-PMH endpoint base URL
        #[arg(long, default_value = config::PMC_OAI_URL, hide = true)]
        endpoint: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            from_year,
            to_year,
            max_records,
            csv,
            xlsx,
            endpoint,
        } => {
            let params = SearchParams {
                query: query.join(" "),
                from_year,
                to_year,
                max_records,
            };
            search_command(&params, &endpoint, csv.as_deref(), xlsx.as_deref())
        }
    }
}

/// Execute the search command.
fn search_command(
    params: &SearchParams,
    endpoint: &str,
    csv: Option<&std::path::Path>,
    xlsx: Option<&std::path::Path>,
) -> Result<()> {
    // Validate inputs before making HTTP requests
    validate_max_records(params.max_records)?;
    validate_year_range(params.from_year, params.to_year)?;

    println!(
        "{} {} ({}-{}, up to {} records)",
        style("Searching PMC for").bold(),
        style(&params.query).cyan(),
        params.from_year,
        params.to_year,
        params.max_records
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Harvesting PMC records via OAI-PMH...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let matches = match search(params, endpoint) {
        Ok(matches) => matches,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!(
        "{} {} matching PMC articles",
        style("Found").green().bold(),
        style(matches.len()).green().bold()
    );

    if !matches.is_empty() {
        println!();
        println!("{}", render_table(&matches));

        if let Some(path) = csv {
            save_csv(&matches, path)?;
            println!("{} {}", style("CSV saved to:").green().bold(), path.display());
        }
        if let Some(path) = xlsx {
            save_xlsx(&matches, path)?;
            println!("{} {}", style("XLSX saved to:").green().bold(), path.display());
        }
    }

    println!();
    println!(
        "{} {}",
        style("Full PMC search:").bold(),
        style(pmc_search_url(&params.query)).cyan().underlined()
    );
    println!(
        "PMC OAI-PMH does not support keyword search; this tool harvests \
         metadata and filters locally. Use the link above for complete results."
    );

    Ok(())
}

/// Render filtered records as a table, in filtered order.
fn render_table(records: &[RawRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(EXPORT_COLUMNS.to_vec());

    for record in records {
        let [title, authors, year, pmcid, doi] = record.field_values();
        table.add_row(vec![
            truncate(&title, TITLE_DISPLAY_WIDTH),
            truncate(&authors, AUTHORS_DISPLAY_WIDTH),
            year,
            pmcid,
            doi,
        ]);
    }

    table
}

/// Truncate a string to at most `max` characters, appending an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
