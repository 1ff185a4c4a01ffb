//! Export module for splitledger
//!
//! Builds the report workbook from the ledger and serializes it through a
//! `ReportSink`:
//! - XLSX: one workbook, one worksheet per sheet
//! - CSV: one directory, one file per sheet

pub mod csv;
pub mod workbook;
pub mod xlsx;

pub use self::csv::CsvDirSink;
pub use workbook::{build_report, Cell, Sheet, Workbook};
pub use xlsx::XlsxSink;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::ExportFormat;
use crate::error::LedgerResult;

/// Serialization target for a report workbook
///
/// Any failure is reported as `LedgerError::Export`.
pub trait ReportSink: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn write(&self, workbook: &Workbook, destination: &Path) -> LedgerResult<()>;
}

/// The sink for a configured format
pub fn sink_for(format: ExportFormat) -> Box<dyn ReportSink> {
    match format {
        ExportFormat::Xlsx => Box::new(XlsxSink),
        ExportFormat::Csv => Box::new(CsvDirSink),
    }
}

/// `financial-report-<YYYY-MM-DD>.xlsx`, or the bare stem for a CSV directory
pub fn report_file_name(date: NaiveDate, format: ExportFormat) -> String {
    let stem = format!("financial-report-{}", date.format("%Y-%m-%d"));
    match format {
        ExportFormat::Xlsx => format!("{}.{}", stem, format.extension()),
        ExportFormat::Csv => stem,
    }
}

/// Full destination of a report written into `dir`
pub fn report_path(dir: &Path, date: NaiveDate, format: ExportFormat) -> PathBuf {
    dir.join(report_file_name(date, format))
}
