//! Ledger entry model
//!
//! A `Transaction` is the normalized shape shared by personal entries and
//! shared expenses. The `EntryKind` tagged union is the only place the two
//! sources differ; downstream code matches on it instead of probing fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{CategoryKind, CategoryRef, DEFAULT_CATEGORY_COLOR, UNCATEGORIZED};
use super::ids::TransactionId;
use super::money::Money;

/// The discriminant of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Income,
    Expense,
    SharedExpense,
}

impl TransactionKind {
    /// The category group this kind draws its categories from
    pub fn category_kind(&self) -> CategoryKind {
        match self {
            Self::Income => CategoryKind::Income,
            Self::Expense | Self::SharedExpense => CategoryKind::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::SharedExpense => "shared-expense",
        }
    }

    /// Parse the wire name of a kind
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "shared-expense" | "shared" => Some(Self::SharedExpense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind-specific payload of a ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryKind {
    Income,
    Expense,
    SharedExpense {
        /// Other participants, excluding the owner
        participants: Vec<String>,
        /// Owner's stored share of the full amount
        user_share: Money,
    },
}

impl EntryKind {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Income => TransactionKind::Income,
            Self::Expense => TransactionKind::Expense,
            Self::SharedExpense { .. } => TransactionKind::SharedExpense,
        }
    }
}

/// A normalized ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(default)]
    pub description: String,

    /// Full amount; for shared expenses this is the group total
    pub amount: Money,

    /// Entry date, `None` when the source row had no usable date
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub category: Option<CategoryRef>,

    #[serde(flatten)]
    pub entry: EntryKind,
}

impl Transaction {
    /// Create a personal income entry
    pub fn income(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::with_entry(description, amount, Some(date), EntryKind::Income)
    }

    /// Create a personal expense entry
    pub fn expense(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self::with_entry(description, amount, Some(date), EntryKind::Expense)
    }

    /// Create a shared expense entry with an already computed share
    pub fn shared(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        participants: Vec<String>,
        user_share: Money,
    ) -> Self {
        Self::with_entry(
            description,
            amount,
            Some(date),
            EntryKind::SharedExpense {
                participants,
                user_share,
            },
        )
    }

    fn with_entry(
        description: impl Into<String>,
        amount: Money,
        date: Option<NaiveDate>,
        entry: EntryKind,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            date,
            category: None,
            entry,
        }
    }

    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    pub fn kind(&self) -> TransactionKind {
        self.entry.kind()
    }

    pub fn is_shared(&self) -> bool {
        matches!(self.entry, EntryKind::SharedExpense { .. })
    }

    /// Participants of a shared expense, empty for personal entries
    pub fn participants(&self) -> &[String] {
        match &self.entry {
            EntryKind::SharedExpense { participants, .. } => participants,
            _ => &[],
        }
    }

    /// Owner's stored share, only present for shared expenses
    pub fn user_share(&self) -> Option<Money> {
        match &self.entry {
            EntryKind::SharedExpense { user_share, .. } => Some(*user_share),
            _ => None,
        }
    }

    /// What this entry costs the owner: the plain amount for an expense,
    /// the stored share for a shared expense, nothing for income
    pub fn owner_spend(&self) -> Option<Money> {
        match &self.entry {
            EntryKind::Income => None,
            EntryKind::Expense => Some(self.amount),
            EntryKind::SharedExpense { user_share, .. } => Some(*user_share),
        }
    }

    /// Category name with the "Uncategorized" fallback
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Category color with the neutral fallback
    pub fn category_color(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.color.as_str())
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_COLOR)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        write!(f, "{} {} {}", date, self.description, self.amount)
    }
}
