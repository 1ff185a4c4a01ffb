//! Category CLI commands

use clap::Subcommand;

use super::open_ledger;
use crate::config::{LedgerPaths, Settings};
use crate::display::format_category_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, TransactionKind};
use crate::storage::JsonStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories visible to you
    List {
        /// Only categories usable for this kind (income, expense, shared-expense)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Add a personal category
    Add {
        /// Category name
        name: String,
        /// Category kind (income or expense)
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Icon key
        #[arg(short, long, default_value = "")]
        icon: String,
        /// Display color
        #[arg(short, long, default_value = "")]
        color: String,
    },
}

fn parse_kind(raw: &str) -> LedgerResult<TransactionKind> {
    TransactionKind::parse(raw).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid kind '{}'. Use: income, expense, shared-expense",
            raw
        ))
    })
}

/// Handle a category command
pub async fn handle_category_command(
    paths: &LedgerPaths,
    settings: &Settings,
    cmd: CategoryCommands,
) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let service = open_ledger(paths, settings).await?;
            let snapshot = service.snapshot();
            let output = match kind {
                Some(kind) => format_category_list(snapshot.categories_of(parse_kind(&kind)?)),
                None => format_category_list(snapshot.categories()),
            };
            print!("{}", output);
        }
        CategoryCommands::Add {
            name,
            kind,
            icon,
            color,
        } => {
            let kind = parse_kind(&kind)?.category_kind();
            let owner = settings.require_owner()?;
            let store = JsonStore::open(paths.clone())?;
            let category = store.insert_category(
                Category::new(name.trim(), kind, owner.id).with_display(icon, color),
            )?;
            println!("Created category: {} ({})", category.name, category.kind);
        }
    }

    Ok(())
}
