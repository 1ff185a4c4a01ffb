//! Recent activity

use crate::models::Transaction;

/// The `limit` most recent entries of a merged ledger
pub fn recent(ledger: &[Transaction], limit: usize) -> &[Transaction] {
    &ledger[..limit.min(ledger.len())]
}
