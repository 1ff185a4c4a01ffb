//! XLSX report sink

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, XlsxError};
use tracing::debug;

use super::workbook::{Cell, Workbook};
use super::ReportSink;
use crate::config::ExportFormat;
use crate::error::{LedgerError, LedgerResult};

fn export_error(context: &str, e: XlsxError) -> LedgerError {
    LedgerError::Export(format!("{}: {}", context, e))
}

/// Writes the report as a single workbook with one worksheet per sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSink;

impl ReportSink for XlsxSink {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn write(&self, workbook: &Workbook, destination: &Path) -> LedgerResult<()> {
        let mut xlsx_workbook = XlsxWorkbook::new();
        let header_format = Format::new().set_bold();

        for sheet in &workbook.sheets {
            let worksheet = xlsx_workbook
                .add_worksheet()
                .set_name(&sheet.name)
                .map_err(|e| export_error(&format!("Failed to create sheet '{}'", sheet.name), e))?;

            for (col, header) in sheet.headers.iter().enumerate() {
                worksheet
                    .write_string_with_format(0, col as u16, header, &header_format)
                    .map_err(|e| export_error("Failed to write header", e))?;
            }

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let row32 = row_idx as u32 + 1;
                for (col, cell) in row.iter().enumerate() {
                    let col16 = col as u16;
                    let written = match cell {
                        Cell::Text(s) => worksheet.write_string(row32, col16, s),
                        Cell::Number(n) => worksheet.write_number(row32, col16, *n),
                    };
                    written.map_err(|e| export_error("Failed to write cell", e))?;
                }
            }
        }

        xlsx_workbook
            .save(destination)
            .map_err(|e| export_error("Failed to save XLSX file", e))?;

        debug!(path = %destination.display(), sheets = workbook.sheets.len(), "wrote xlsx report");
        Ok(())
    }
}
