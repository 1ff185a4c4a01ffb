//! Category totals
//!
//! Owner spending for one month grouped by category name.

use crate::models::{EntryKind, Money, Month, MonthMatching, Transaction};

/// Spending attributed to one category in a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name, "Uncategorized" when the entry had none
    pub name: String,
    /// Plain expense amounts plus shared-expense shares
    pub value: Money,
    /// Color of the first entry seen for this name
    pub color: String,
}

/// Group the month's expenses and shared-expense shares by category
///
/// Income is excluded. A shared expense contributes the owner's stored
/// share, never the full amount. Output keeps first-appearance order.
pub fn category_totals(
    ledger: &[Transaction],
    month: Month,
    matching: MonthMatching,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in ledger {
        let Some(date) = txn.date else { continue };
        if !month.matches(date, matching) {
            continue;
        }

        let value = match &txn.entry {
            EntryKind::Income => continue,
            EntryKind::Expense => txn.amount,
            EntryKind::SharedExpense { user_share, .. } => *user_share,
        };

        let name = txn.category_name();
        match totals.iter_mut().find(|t| t.name == name) {
            Some(total) => total.value += value,
            None => totals.push(CategoryTotal {
                name: name.to_string(),
                value,
                color: txn.category_color().to_string(),
            }),
        }
    }

    totals
}
