use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use splitledger::cli::{
    handle_category_command, handle_entry_command, handle_export_command, handle_report_command,
    handle_shared_command, handle_transaction_command, open_ledger, CategoryCommands,
    EntryCommands, ExportArgs, ReportCommands, SharedCommands, TransactionCommands,
};
use splitledger::config::{LedgerPaths, Settings};
use splitledger::models::{Owner, TransactionKind};

/// Environment variable holding the log filter, falls back to `RUST_LOG`
const LOG_ENV: &str = "SPLITLEDGER_LOG";

#[derive(Parser)]
#[command(
    name = "splitledger",
    author = "Kaylee Beyene",
    version,
    about = "Personal and shared expense ledger",
    long_about = "splitledger records income, expenses and expenses shared with \
                  other people, and reports category totals, monthly and daily \
                  series from the merged ledger."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up the data directory and owner identity
    Init {
        /// Your email, used to match shared expenses you are listed on
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Show current configuration and paths
    Config,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Income commands
    #[command(subcommand)]
    Income(EntryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(EntryCommands),

    /// Shared expense commands
    #[command(subcommand)]
    Shared(SharedCommands),

    /// List, show and delete entries
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Reports over the merged ledger
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the ledger as a report workbook
    Export(ExportArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init { email }) => {
            println!("Initializing splitledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;

            match (email, settings.owner.as_ref()) {
                (Some(email), Some(owner)) if owner.is_contact(&email) => {}
                (Some(email), _) => settings.owner = Some(Owner::new(email.trim())),
                (None, Some(_)) => {}
                (None, None) => anyhow::bail!(
                    "An email is required on first run: splitledger init --email you@example.com"
                ),
            }
            settings.save(&paths)?;

            let owner = settings.require_owner()?;
            println!("Initialization complete!");
            println!("Owner: {}", owner);
            println!();
            println!("Run 'splitledger category add <name>' to create categories.");
        }
        Some(Commands::Config) => {
            println!("splitledger Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            match &settings.owner {
                Some(owner) => println!("  Owner:          {}", owner),
                None => println!("  Owner:          (not initialized)"),
            }
            println!("  Months back:    {}", settings.months_back);
            println!("  Month matching: {:?}", settings.month_matching);
            println!("  Export format:  {}", settings.export_format.extension());
            println!("  Date format:    {}", settings.date_format);
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&paths, &settings, cmd).await?;
        }
        Some(Commands::Income(cmd)) => {
            let mut service = open_ledger(&paths, &settings).await?;
            handle_entry_command(&mut service, &settings, TransactionKind::Income, cmd).await?;
        }
        Some(Commands::Expense(cmd)) => {
            let mut service = open_ledger(&paths, &settings).await?;
            handle_entry_command(&mut service, &settings, TransactionKind::Expense, cmd).await?;
        }
        Some(Commands::Shared(cmd)) => {
            let mut service = open_ledger(&paths, &settings).await?;
            handle_shared_command(&mut service, &settings, cmd).await?;
        }
        Some(Commands::Txn(cmd)) => {
            let mut service = open_ledger(&paths, &settings).await?;
            handle_transaction_command(&mut service, &settings, cmd).await?;
        }
        Some(Commands::Report(cmd)) => {
            let service = open_ledger(&paths, &settings).await?;
            handle_report_command(&service, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let service = open_ledger(&paths, &settings).await?;
            let destination = handle_export_command(&service, &paths, &settings, args)?;
            println!("Report written to {}", destination.display());
        }
        None => {
            println!("splitledger - personal and shared expense ledger");
            println!();
            println!("Run 'splitledger --help' for usage information.");
            println!("Run 'splitledger init --email you@example.com' to get started.");
        }
    }

    Ok(())
}
