//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger entries, categories and reports
//! as terminal tables.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::{
    format_category_totals, format_daily_series, format_monthly_series, format_summary,
};
pub use transaction::{format_ledger_table, format_transaction_details};
