//! CSV report sink
//!
//! Writes one CSV file per sheet into a report directory. Sheet names are
//! turned into file names by lowercasing and replacing spaces with dashes,
//! so "Shared Expenses" becomes `shared-expenses.csv`.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::workbook::{Sheet, Workbook};
use super::ReportSink;
use crate::config::ExportFormat;
use crate::error::{LedgerError, LedgerResult};

/// File name used for a sheet inside the report directory
pub fn sheet_file_name(sheet_name: &str) -> String {
    format!("{}.csv", sheet_name.to_lowercase().replace(' ', "-"))
}

fn write_sheet(sheet: &Sheet, path: &Path) -> LedgerResult<()> {
    let export_err = |e: csv::Error| LedgerError::Export(format!("{}: {}", path.display(), e));

    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(export_err)?;

    writer.write_record(&sheet.headers).map_err(export_err)?;
    for row in &sheet.rows {
        writer
            .write_record(row.iter().map(|cell| cell.display()))
            .map_err(export_err)?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("{}: {}", path.display(), e)))
}

/// Writes the report as a directory of CSV files
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDirSink;

impl ReportSink for CsvDirSink {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write(&self, workbook: &Workbook, destination: &Path) -> LedgerResult<()> {
        fs::create_dir_all(destination).map_err(|e| {
            LedgerError::Export(format!(
                "Failed to create report directory {}: {}",
                destination.display(),
                e
            ))
        })?;

        for sheet in &workbook.sheets {
            write_sheet(sheet, &destination.join(sheet_file_name(&sheet.name)))?;
        }

        debug!(path = %destination.display(), sheets = workbook.sheets.len(), "wrote csv report");
        Ok(())
    }
}
