//! CSV and XLSX export of filtered records.
//!
//! Both writers project records through [`RawRecord::field_values`], so the
//! exports carry exactly the values shown in the result table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::types::RawRecord;

/// Column headers, in table and export order.
pub const EXPORT_COLUMNS: [&str; 5] = ["Title", "Authors", "Year", "PMCID", "DOI"];

/// Sheet name used in the XLSX export.
pub const XLSX_SHEET_NAME: &str = "PMC Results";

/// Write records as CSV with a header row.
///
/// # Arguments
/// * `records` - Filtered records, in display order
/// * `writer` - Destination
pub fn write_csv<W: Write>(records: &[RawRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.field_values())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write records as CSV to a file.
pub fn save_csv(records: &[RawRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(records, file)?;
    tracing::info!(path = %path.display(), rows = records.len(), "Wrote CSV export");
    Ok(())
}

/// Write records as a single-sheet XLSX workbook with a header row.
pub fn save_xlsx(records: &[RawRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(XLSX_SHEET_NAME)?;

    for (col, header) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.field_values().iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, value)?;
        }
    }

    workbook.save(path)?;
    tracing::info!(path = %path.display(), rows = records.len(), "Wrote XLSX export");
    Ok(())
}
