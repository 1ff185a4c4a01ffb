//! Ledger assembly
//!
//! Normalization, merging and share computation: everything needed to turn
//! raw store rows into the single time-ordered ledger the reports work on.

pub mod merge;
pub mod normalize;
pub mod share;
pub mod snapshot;

pub use merge::merge;
pub use normalize::{normalize_shared_expenses, normalize_transactions};
pub use share::{compute_share, parse_participants};
pub use snapshot::LedgerSnapshot;

use crate::models::Transaction;
use crate::storage::{SharedExpenseRow, TransactionRow};

/// Normalize both row sources and merge them into one ledger
pub fn build_ledger(
    personal: Vec<TransactionRow>,
    shared: Vec<SharedExpenseRow>,
) -> Vec<Transaction> {
    merge(
        normalize_transactions(personal),
        normalize_shared_expenses(shared),
    )
}
