//! Transaction CLI commands
//!
//! Listing, inspecting and deleting entries of the merged ledger.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_ledger_table, format_transaction_details};
use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionKind;
use crate::reports::LedgerFilter;
use crate::services::LedgerService;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List entries, newest first
    List {
        /// Search description or category name
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by exact category name ("all" disables the filter)
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Filter by kind (income, expense, shared-expense)
        #[arg(short, long)]
        kind: Option<String>,
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show entry details
    Show {
        /// Entry ID
        id: String,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: String,
    },
}

/// Handle a transaction command
pub async fn handle_transaction_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::List {
            search,
            category,
            kind,
            limit,
        } => {
            let mut filter = LedgerFilter::new().limit(limit);
            if let Some(term) = search {
                filter = filter.search(term);
            }
            if let Some(name) = category {
                filter = filter.category(name);
            }
            if let Some(kind) = kind {
                let parsed = TransactionKind::parse(&kind).ok_or_else(|| {
                    LedgerError::Validation(format!(
                        "Invalid kind '{}'. Use: income, expense, shared-expense",
                        kind
                    ))
                })?;
                filter = filter.kind(parsed);
            }

            let entries = filter.apply(service.ledger());
            print!(
                "{}",
                format_ledger_table(entries, &settings.currency_symbol)
            );
        }
        TransactionCommands::Show { id } => {
            let txn = service
                .snapshot()
                .find(&id)
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(txn, &settings.currency_symbol));
        }
        TransactionCommands::Delete { id } => {
            service.delete(&id).await?;
        }
    }

    Ok(())
}
