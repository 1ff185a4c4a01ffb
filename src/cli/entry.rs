//! Income, expense and shared-expense CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::Settings;
use crate::display::format_transaction_details;
use crate::error::LedgerResult;
use crate::models::TransactionKind;
use crate::services::{AddEntryInput, LedgerService};

/// Income and expense subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add a new entry
    Add {
        /// Description
        description: String,
        /// Amount (e.g., "15.50")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Shared expense subcommands
#[derive(Subcommand)]
pub enum SharedCommands {
    /// Add a shared expense split equally with other people
    Add {
        /// Description
        description: String,
        /// Full amount paid by the group
        amount: String,
        /// Comma-separated participant emails, excluding yourself
        #[arg(short = 'w', long = "with")]
        participants: String,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn build_input(
    description: String,
    amount: &str,
    category: Option<String>,
    date: Option<&str>,
) -> LedgerResult<AddEntryInput> {
    let mut input = AddEntryInput::new(description, parse_amount(amount)?, parse_date(date)?);
    input.category = category;
    Ok(input)
}

/// Handle an `income` or `expense` command
pub async fn handle_entry_command(
    service: &mut LedgerService,
    settings: &Settings,
    kind: TransactionKind,
    cmd: EntryCommands,
) -> LedgerResult<()> {
    match cmd {
        EntryCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let input = build_input(description, &amount, category, date.as_deref())?;
            let txn = match kind {
                TransactionKind::Income => service.add_income(input).await?,
                _ => service.add_expense(input).await?,
            };
            print!("{}", format_transaction_details(&txn, &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Handle a `shared` command
pub async fn handle_shared_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: SharedCommands,
) -> LedgerResult<()> {
    match cmd {
        SharedCommands::Add {
            description,
            amount,
            participants,
            category,
            date,
        } => {
            let input = build_input(description, &amount, category, date.as_deref())?;
            let txn = service.add_shared_expense(input, &participants).await?;
            print!("{}", format_transaction_details(&txn, &settings.currency_symbol));
        }
    }

    Ok(())
}
