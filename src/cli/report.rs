//! Report CLI commands

use clap::Subcommand;

use super::parse_month;
use crate::config::Settings;
use crate::display::{
    format_category_totals, format_daily_series, format_ledger_table, format_monthly_series,
    format_summary,
};
use crate::error::LedgerResult;
use crate::reports::{
    category_totals, daily_series, distinct_participants, kind_summary, monthly_series, recent,
    MAX_MONTHS_BACK,
};
use crate::services::LedgerService;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending by category for a month
    Categories {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Income, expenses and shared shares for the last N months
    Monthly {
        /// Number of months (1-120), defaults to the configured value
        #[arg(
            short = 'n',
            long,
            value_parser = clap::value_parser!(u32).range(1..=MAX_MONTHS_BACK as i64)
        )]
        months: Option<u32>,
    },
    /// Spending per day of a month
    Daily {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Totals per kind, balance and people you share with
    Summary {
        /// Month used for "this month" figures (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Most recent entries
    Recent {
        /// Number of entries, defaults to the configured value
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    service: &LedgerService,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let ledger = service.ledger();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Categories { month } => {
            let month = parse_month(month.as_deref())?;
            let totals = category_totals(ledger, month, settings.month_matching);
            print!("{}", format_category_totals(month, &totals, symbol));
        }
        ReportCommands::Monthly { months } => {
            let today = chrono::Local::now().date_naive();
            let months = months.unwrap_or(settings.months_back);
            let buckets = monthly_series(ledger, today, months, settings.month_matching);
            print!("{}", format_monthly_series(&buckets, symbol));
        }
        ReportCommands::Daily { month } => {
            let month = parse_month(month.as_deref())?;
            let points = daily_series(ledger, month);
            print!("{}", format_daily_series(month, &points, symbol));
        }
        ReportCommands::Summary { month } => {
            let month = parse_month(month.as_deref())?;
            let summary = kind_summary(ledger, month, settings.month_matching);
            let people = distinct_participants(ledger, Some(service.owner()));
            print!("{}", format_summary(&summary, month, people, symbol));
        }
        ReportCommands::Recent { limit } => {
            let limit = limit.unwrap_or(settings.recent_limit);
            print!("{}", format_ledger_table(recent(ledger, limit), symbol));
        }
    }

    Ok(())
}
