//! Core data models for splitledger
//!
//! This module contains the data structures of the ledger domain: normalized
//! entries, categories, owner identity, money and calendar months.

pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod owner;
pub mod transaction;

pub use category::{
    Category, CategoryKind, CategoryRef, DEFAULT_CATEGORY_COLOR, UNCATEGORIZED,
};
pub use ids::{CategoryId, OwnerId, TransactionId};
pub use money::Money;
pub use month::{Month, MonthMatching};
pub use owner::Owner;
pub use transaction::{EntryKind, Transaction, TransactionKind};
