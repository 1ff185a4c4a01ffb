//! Logical report workbook
//!
//! A format-neutral description of the exported report. Sinks turn it into
//! an `.xlsx` file or a directory of CSV files.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryKind, Money, Transaction};

pub const TRANSACTIONS_SHEET: &str = "Transactions";
pub const SHARED_EXPENSES_SHEET: &str = "Shared Expenses";
pub const SUMMARY_SHEET: &str = "Summary";

/// A single cell value; amounts stay unrounded numbers
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text rendering used by text-only sinks
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<Money> for Cell {
    fn from(money: Money) -> Self {
        Self::Number(money.value())
    }
}

/// A named table with a header row
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// An ordered set of sheets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

fn invalid_date_format(date_format: &str) -> LedgerError {
    LedgerError::Export(format!("Invalid date format '{}'", date_format))
}

fn date_items(date_format: &str) -> LedgerResult<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(date_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid_date_format(date_format));
    }
    Ok(items)
}

// Specifiers like `%H` parse fine but fail on a bare date, so the write is
// checked too.
fn date_cell(
    date: Option<NaiveDate>,
    items: &[Item<'_>],
    date_format: &str,
) -> LedgerResult<Cell> {
    let mut text = String::new();
    if let Some(d) = date {
        write!(text, "{}", d.format_with_items(items.iter()))
            .map_err(|_| invalid_date_format(date_format))?;
    }
    Ok(Cell::Text(text))
}

/// Build the report workbook from a merged ledger
///
/// Sheets in order: "Transactions" (income and plain expenses), "Shared
/// Expenses" (only when the ledger has any) and "Summary". The summary
/// counts plain expenses only; shared expenses are reported on their own
/// sheet. Rows keep ledger order.
///
/// # Errors
///
/// Returns `LedgerError::Export` if `date_format` is not a usable date format.
pub fn build_report(ledger: &[Transaction], date_format: &str) -> LedgerResult<Workbook> {
    let items = date_items(date_format)?;
    let mut transactions = Sheet::new(
        TRANSACTIONS_SHEET,
        &["Date", "Description", "Type", "Category", "Amount"],
    );
    let mut shared = Sheet::new(
        SHARED_EXPENSES_SHEET,
        &[
            "Date",
            "Description",
            "TotalAmount",
            "YourShare",
            "Participants",
            "Category",
        ],
    );

    let mut income_total = Money::zero();
    let mut expense_total = Money::zero();

    for txn in ledger {
        match &txn.entry {
            EntryKind::Income | EntryKind::Expense => {
                if matches!(txn.entry, EntryKind::Income) {
                    income_total += txn.amount;
                } else {
                    expense_total += txn.amount;
                }
                transactions.push_row(vec![
                    date_cell(txn.date, &items, date_format)?,
                    Cell::text(&txn.description),
                    Cell::text(txn.kind().as_str()),
                    Cell::text(txn.category_name()),
                    txn.amount.into(),
                ]);
            }
            EntryKind::SharedExpense {
                participants,
                user_share,
            } => {
                shared.push_row(vec![
                    date_cell(txn.date, &items, date_format)?,
                    Cell::text(&txn.description),
                    txn.amount.into(),
                    (*user_share).into(),
                    Cell::text(participants.join(", ")),
                    Cell::text(txn.category_name()),
                ]);
            }
        }
    }

    let mut summary = Sheet::new(SUMMARY_SHEET, &["Metric", "Amount"]);
    summary.push_row(vec![Cell::text("Total Income"), income_total.into()]);
    summary.push_row(vec![Cell::text("Total Expenses"), expense_total.into()]);
    summary.push_row(vec![
        Cell::text("Net Balance"),
        (income_total - expense_total).into(),
    ]);

    let mut workbook = Workbook::default();
    workbook.sheets.push(transactions);
    if !shared.rows.is_empty() {
        workbook.sheets.push(shared);
    }
    workbook.sheets.push(summary);
    Ok(workbook)
}
