//! Ledger normalizer
//!
//! Turns raw personal rows and raw shared-expense rows into the common
//! [`Transaction`] shape. Normalization keeps every defined field, never
//! filters or sorts, and never invents a category.
//!
//! Source rows are not schema-validated, so missing values get permissive
//! defaults instead of errors: an absent or unparseable date becomes `None`
//! (sorted last by the merger) and an absent amount or share becomes zero.

use chrono::{DateTime, NaiveDate};
use tracing::warn;

use crate::models::{EntryKind, Money, Transaction};
use crate::storage::rows::{PersonalKind, SharedExpenseRow, TransactionRow, ROW_DATE_FORMAT};

/// Parse a stored date, accepting plain dates and full RFC 3339 timestamps
pub fn parse_row_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, ROW_DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn row_date(id: &impl std::fmt::Display, raw: Option<&str>) -> Option<NaiveDate> {
    let date = parse_row_date(raw);
    if date.is_none() {
        warn!(id = %id, raw = ?raw, "row has no usable date, sorting it last");
    }
    date
}

fn row_amount(id: &impl std::fmt::Display, raw: Option<f64>, field: &str) -> Money {
    match raw {
        Some(value) if value.is_finite() => Money::new(value),
        _ => {
            warn!(id = %id, field, "row has no usable amount, treating it as zero");
            Money::zero()
        }
    }
}

/// Normalize one personal income/expense row
pub fn normalize_transaction(row: TransactionRow) -> Transaction {
    let date = row_date(&row.id, row.date.as_deref());
    let amount = row_amount(&row.id, row.amount, "amount");
    let entry = match row.kind {
        PersonalKind::Income => EntryKind::Income,
        PersonalKind::Expense => EntryKind::Expense,
    };

    Transaction {
        id: row.id,
        description: row.description,
        amount,
        date,
        category: row.category,
        entry,
    }
}

/// Normalize one shared-expense row; its kind is always `shared-expense`
pub fn normalize_shared_expense(row: SharedExpenseRow) -> Transaction {
    let date = row_date(&row.id, row.date.as_deref());
    let amount = row_amount(&row.id, row.amount, "amount");
    let user_share = row_amount(&row.id, row.user_share, "user_share");

    Transaction {
        id: row.id,
        description: row.description,
        amount,
        date,
        category: row.category,
        entry: EntryKind::SharedExpense {
            participants: row.participants,
            user_share,
        },
    }
}

pub fn normalize_transactions(rows: Vec<TransactionRow>) -> Vec<Transaction> {
    rows.into_iter().map(normalize_transaction).collect()
}

pub fn normalize_shared_expenses(rows: Vec<SharedExpenseRow>) -> Vec<Transaction> {
    rows.into_iter().map(normalize_shared_expense).collect()
}
