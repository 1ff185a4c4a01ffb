//! Raw store records
//!
//! These are the plain rows exchanged with the durable store. They are not
//! schema-validated: dates arrive as strings and amounts may be missing, so
//! the normalizer applies permissive defaults when turning them into ledger
//! entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, CategoryRef, OwnerId, TransactionId};

/// Kind column of the personal transactions table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalKind {
    Income,
    Expense,
}

/// A row of the personal transactions table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: TransactionId,
    pub owner_id: OwnerId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    pub kind: PersonalKind,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Joined category display fields, filled by the store on read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

/// A row of the shared expenses table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedExpenseRow {
    pub id: TransactionId,
    /// Creator of the shared expense
    pub owner_id: OwnerId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub user_share: Option<f64>,
}

/// Category rows are stored in their model shape
pub type CategoryRow = Category;

/// Insert payload for a personal entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransactionRow {
    pub owner_id: OwnerId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub kind: PersonalKind,
    pub category_id: Option<CategoryId>,
}

/// Insert payload for a shared expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewSharedExpenseRow {
    pub owner_id: OwnerId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category_id: Option<CategoryId>,
    pub participants: Vec<String>,
    pub user_share: f64,
}

/// Wire format for stored dates
pub const ROW_DATE_FORMAT: &str = "%Y-%m-%d";

impl NewTransactionRow {
    /// Materialize the row the store will persist
    pub fn into_row(self, id: TransactionId) -> TransactionRow {
        TransactionRow {
            id,
            owner_id: self.owner_id,
            description: self.description,
            amount: Some(self.amount),
            date: Some(self.date.format(ROW_DATE_FORMAT).to_string()),
            kind: self.kind,
            category_id: self.category_id,
            category: None,
        }
    }
}

impl NewSharedExpenseRow {
    pub fn into_row(self, id: TransactionId) -> SharedExpenseRow {
        SharedExpenseRow {
            id,
            owner_id: self.owner_id,
            description: self.description,
            amount: Some(self.amount),
            date: Some(self.date.format(ROW_DATE_FORMAT).to_string()),
            category_id: self.category_id,
            category: None,
            participants: self.participants,
            user_share: Some(self.user_share),
        }
    }
}
