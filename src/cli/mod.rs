//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod entry;
pub mod export;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use entry::{handle_entry_command, handle_shared_command, EntryCommands, SharedCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::sync::Arc;

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Month};
use crate::notify::TerminalNotifier;
use crate::services::LedgerService;
use crate::storage::JsonStore;

/// Open the JSON store for the configured owner and load the ledger
pub async fn open_ledger(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<LedgerService> {
    let owner = settings.require_owner()?.clone();
    let store = Arc::new(JsonStore::open(paths.clone())?);
    let notifier = Arc::new(TerminalNotifier::default());

    let mut service = LedgerService::new(store, notifier, owner);
    service.refresh(&CancellationToken::new()).await?;
    Ok(service)
}

/// Parse a user-entered amount
pub fn parse_amount(raw: &str) -> LedgerResult<Money> {
    Money::parse(raw).map_err(|e| LedgerError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date, defaulting to today
pub fn parse_date(raw: Option<&str>) -> LedgerResult<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a `YYYY-MM` month, defaulting to the current month
pub fn parse_month(raw: Option<&str>) -> LedgerResult<Month> {
    match raw {
        Some(s) => Month::parse(s).map_err(|e| LedgerError::Validation(e.to_string())),
        None => Ok(Month::current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("$1,250.50").unwrap(), Money::new(1250.5));
        assert!(parse_amount("lots").unwrap_err().is_validation());

        assert_eq!(
            parse_date(Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date(Some("2023-02-29")).is_err());

        assert_eq!(parse_month(Some("2024-01")).unwrap(), Month::new(2024, 1).unwrap());
        assert!(parse_month(Some("2024-13")).is_err());
    }
}
