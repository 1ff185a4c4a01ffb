//! Per-kind totals
//!
//! All-time and current-month totals for each entry kind, plus the overall
//! balance and the number of people the owner shares expenses with.

use crate::models::{EntryKind, Money, Month, MonthMatching, Owner, Transaction};

/// Totals of one entry kind
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KindTotals {
    pub count: usize,
    /// Sum of full amounts
    pub all_time: Money,
    /// Sum of full amounts dated in the reference month
    pub this_month: Money,
}

impl KindTotals {
    fn add(&mut self, amount: Money, in_month: bool) {
        self.count += 1;
        self.all_time += amount;
        if in_month {
            self.this_month += amount;
        }
    }
}

/// Summary of the whole ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KindSummary {
    pub income: KindTotals,
    pub expenses: KindTotals,
    /// Shared expenses by their full group totals
    pub shared: KindTotals,
    /// Shared expenses by the owner's stored share
    pub shared_share: KindTotals,
}

impl KindSummary {
    /// Income minus plain expenses minus the owner's shared shares
    pub fn balance(&self) -> Money {
        self.income.all_time - self.expenses.all_time - self.shared_share.all_time
    }

    /// Everything the owner spent, plain expenses plus shares
    pub fn total_spend(&self) -> Money {
        self.expenses.all_time + self.shared_share.all_time
    }
}

/// Summarize the ledger; `month` selects the "this month" figures
pub fn kind_summary(ledger: &[Transaction], month: Month, matching: MonthMatching) -> KindSummary {
    let mut summary = KindSummary::default();

    for txn in ledger {
        let in_month = txn.date.is_some_and(|d| month.matches(d, matching));
        match &txn.entry {
            EntryKind::Income => summary.income.add(txn.amount, in_month),
            EntryKind::Expense => summary.expenses.add(txn.amount, in_month),
            EntryKind::SharedExpense { user_share, .. } => {
                summary.shared.add(txn.amount, in_month);
                summary.shared_share.add(*user_share, in_month);
            }
        }
    }

    summary
}

/// Number of unique people across all shared expenses
///
/// Identifiers compare case-insensitively after trimming. The owner is not
/// counted, which matters for expenses someone else created and listed the
/// owner on.
pub fn distinct_participants(ledger: &[Transaction], owner: Option<&Owner>) -> usize {
    let mut seen: Vec<String> = Vec::new();

    for participant in ledger.iter().flat_map(|t| t.participants()) {
        let key = participant.trim().to_lowercase();
        if key.is_empty() || owner.is_some_and(|o| o.is_contact(&key)) {
            continue;
        }
        if !seen.contains(&key) {
            seen.push(key);
        }
    }

    seen.len()
}
