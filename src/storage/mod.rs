//! Storage layer for splitledger
//!
//! `LedgerStore` is the repository boundary the engine talks to. It returns
//! and accepts plain rows and carries no business logic. `JsonStore` is the
//! bundled adapter backed by JSON files with atomic writes.

pub mod file_io;
pub mod json_store;
pub mod rows;

pub use file_io::{read_json, write_json_atomic};
pub use json_store::JsonStore;
pub use rows::{
    CategoryRow, NewSharedExpenseRow, NewTransactionRow, PersonalKind, SharedExpenseRow,
    TransactionRow,
};

use async_trait::async_trait;

use crate::error::LedgerResult;
use crate::models::{OwnerId, TransactionId};

/// Repository contract of the durable store
///
/// Every call may fail with a store-level error. Callers do not retry.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Personal income and expense rows owned by `owner_id`
    async fn fetch_transactions(&self, owner_id: OwnerId) -> LedgerResult<Vec<TransactionRow>>;

    /// Shared expense rows the owner created or is listed on as a participant
    async fn fetch_shared_expenses(
        &self,
        owner_id: OwnerId,
        owner_email: &str,
    ) -> LedgerResult<Vec<SharedExpenseRow>>;

    /// Owner-specific categories plus global ones, ordered by name
    async fn fetch_categories(&self, owner_id: OwnerId) -> LedgerResult<Vec<CategoryRow>>;

    async fn insert_transaction(&self, row: NewTransactionRow) -> LedgerResult<TransactionRow>;

    async fn insert_shared_expense(
        &self,
        row: NewSharedExpenseRow,
    ) -> LedgerResult<SharedExpenseRow>;

    async fn delete_transaction(&self, id: TransactionId) -> LedgerResult<()>;

    async fn delete_shared_expense(&self, id: TransactionId) -> LedgerResult<()>;
}
