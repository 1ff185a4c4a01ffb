//! Ledger filtering
//!
//! The search box and category selector of the entry lists.

use crate::models::{Transaction, TransactionKind};

/// Category selector value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Filter options for listing ledger entries
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    /// Case-insensitive substring of description or category name
    pub search: Option<String>,
    /// Exact category name; "all" disables it
    pub category: Option<String>,
    /// Restrict to one kind
    pub kind: Option<TransactionKind>,
    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

impl LedgerFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter by category name
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category = Some(name.into());
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single entry against every criterion except the limit
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.kind.is_some_and(|kind| txn.kind() != kind) {
            return false;
        }

        if let Some(name) = self.category.as_deref() {
            if !name.is_empty() && name != ALL_CATEGORIES {
                match &txn.category {
                    Some(category) if category.name == name => {}
                    _ => return false,
                }
            }
        }

        if let Some(term) = self.search.as_deref() {
            let term = term.to_lowercase();
            let in_description = txn.description.to_lowercase().contains(&term);
            let in_category = txn
                .category
                .as_ref()
                .is_some_and(|c| c.name.to_lowercase().contains(&term));
            if !in_description && !in_category {
                return false;
            }
        }

        true
    }

    /// Apply the filter, keeping ledger order
    pub fn apply<'a>(&self, ledger: &'a [Transaction]) -> Vec<&'a Transaction> {
        let matching = ledger.iter().filter(|t| self.matches(t));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}
