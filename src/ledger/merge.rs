//! Ledger merger
//!
//! Concatenates normalized personal and shared entries and sorts them by
//! date, newest first.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::Transaction;

/// Descending date order where a missing date counts as the oldest possible
fn newest_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    // `None < Some(_)` for Option, so reversing puts undated entries last
    b.cmp(&a)
}

/// Merge both sources into one ledger sorted by date descending
///
/// The sort is stable: entries sharing a date keep their concatenation
/// order, which puts personal entries before shared ones. That tie-break is a
/// convention of the merge, not an ordering signal.
pub fn merge(personal: Vec<Transaction>, shared: Vec<Transaction>) -> Vec<Transaction> {
    let mut ledger = personal;
    ledger.extend(shared);
    ledger.sort_by(|a, b| newest_first(a.date, b.date));
    ledger
}
