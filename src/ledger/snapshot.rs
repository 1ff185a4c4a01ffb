//! Versioned ledger snapshot
//!
//! The snapshot is the in-memory result of one complete refresh. It is never
//! patched in place; a successful refresh replaces it with a new one carrying
//! the next version number.

use crate::models::{Category, CategoryKind, Transaction, TransactionKind};

/// The merged ledger and the categories visible to the owner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    version: u64,
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
}

impl LedgerSnapshot {
    /// The empty snapshot a service starts from (version 0)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(version: u64, transactions: Vec<Transaction>, categories: Vec<Category>) -> Self {
        Self {
            version,
            transactions,
            categories,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Merged ledger, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Categories usable for entries of `kind`; shared expenses use the
    /// expense set
    pub fn categories_of(&self, kind: TransactionKind) -> Vec<&Category> {
        let wanted: CategoryKind = kind.category_kind();
        self.categories.iter().filter(|c| c.kind == wanted).collect()
    }

    /// Look up a category for `kind` by exact name
    pub fn category_by_name(&self, name: &str, kind: TransactionKind) -> Option<&Category> {
        let wanted = kind.category_kind();
        self.categories
            .iter()
            .find(|c| c.kind == wanted && c.name == name)
    }

    /// Find an entry by full id or short display id
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id.matches(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OwnerId};
    use chrono::NaiveDate;

    fn snapshot() -> LedgerSnapshot {
        let owner = OwnerId::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        LedgerSnapshot::new(
            3,
            vec![Transaction::expense("Coffee", Money::new(3.5), date)],
            vec![
                Category::new("Food", CategoryKind::Expense, owner),
                Category::global("Salary", CategoryKind::Income),
            ],
        )
    }

    #[test]
    fn test_empty() {
        let empty = LedgerSnapshot::empty();
        assert_eq!(empty.version(), 0);
        assert!(empty.is_empty());
        assert!(empty.categories().is_empty());
    }

    #[test]
    fn test_categories_of_kind() {
        let snap = snapshot();
        let names = |kind| -> Vec<String> {
            snap.categories_of(kind)
                .into_iter()
                .map(|c| c.name.clone())
                .collect()
        };

        assert_eq!(names(TransactionKind::Income), vec!["Salary"]);
        assert_eq!(names(TransactionKind::Expense), vec!["Food"]);
        assert_eq!(names(TransactionKind::SharedExpense), vec!["Food"]);
        assert!(snap
            .category_by_name("Food", TransactionKind::Income)
            .is_none());
    }

    #[test]
    fn test_find_by_short_and_full_id() {
        let snap = snapshot();
        let txn = &snap.transactions()[0];

        assert_eq!(snap.find(&txn.id.to_string()).map(|t| t.id), Some(txn.id));
        assert_eq!(
            snap.find(&txn.id.as_uuid().to_string()).map(|t| t.id),
            Some(txn.id)
        );
        assert!(snap.find("txn-00000000").is_none());
    }
}
