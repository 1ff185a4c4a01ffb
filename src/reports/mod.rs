//! Reports module for splitledger
//!
//! Pure aggregations over the merged ledger: category totals, the rolling
//! monthly series, the daily spending series, per-kind summaries, filtering
//! and recent activity. None of them read the clock; callers pass the
//! reference month or date.

pub mod categories;
pub mod daily;
pub mod filter;
pub mod monthly;
pub mod recent;
pub mod summary;

pub use categories::{category_totals, CategoryTotal};
pub use daily::{daily_series, DailyPoint};
pub use filter::{LedgerFilter, ALL_CATEGORIES};
pub use monthly::{monthly_series, MonthlyBucket, DEFAULT_MONTHS_BACK, MAX_MONTHS_BACK};
pub use recent::recent;
pub use summary::{distinct_participants, kind_summary, KindSummary, KindTotals};
