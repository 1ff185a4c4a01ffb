//! Export CLI command

use std::path::PathBuf;

use clap::Args;

use crate::config::{ExportFormat, LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{report_path, sink_for};
use crate::services::LedgerService;

/// Arguments of the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output file, or a directory to place the dated report in
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format (xlsx or csv), defaults to the configured format
    #[arg(short, long)]
    pub format: Option<String>,
}

fn parse_format(raw: &str) -> LedgerResult<ExportFormat> {
    match raw.trim().to_lowercase().as_str() {
        "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
        "csv" => Ok(ExportFormat::Csv),
        other => Err(LedgerError::Validation(format!(
            "Unknown export format '{}'. Use: xlsx, csv",
            other
        ))),
    }
}

/// Handle the export command, returning where the report was written
pub fn handle_export_command(
    service: &LedgerService,
    paths: &LedgerPaths,
    settings: &Settings,
    args: ExportArgs,
) -> LedgerResult<PathBuf> {
    let format = match args.format.as_deref() {
        Some(raw) => parse_format(raw)?,
        None => settings.export_format,
    };
    let today = chrono::Local::now().date_naive();

    let destination = match args.output {
        Some(path) if path.is_dir() => report_path(&path, today, format),
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            report_path(&paths.export_dir(), today, format)
        }
    };

    let sink = sink_for(format);
    service.export(sink.as_ref(), &destination, &settings.date_format)?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("XLSX").unwrap(), ExportFormat::Xlsx);
        assert_eq!(parse_format("csv").unwrap(), ExportFormat::Csv);
        assert!(parse_format("pdf").unwrap_err().is_validation());
    }
}
