//! JSON file store
//!
//! Keeps transaction, shared expense and category rows in memory and writes
//! each table back to its own JSON file after every mutation. A table only
//! changes in memory once its file has been written.

use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use super::rows::{
    CategoryRow, NewSharedExpenseRow, NewTransactionRow, SharedExpenseRow, TransactionRow,
};
use super::LedgerStore;
use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, CategoryId, CategoryRef, OwnerId, TransactionId};

#[derive(Debug, Default, Serialize, Deserialize)]
struct TransactionData {
    transactions: Vec<TransactionRow>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SharedExpenseData {
    shared_expenses: Vec<SharedExpenseRow>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryData {
    categories: Vec<CategoryRow>,
}

/// File-backed implementation of [`LedgerStore`]
pub struct JsonStore {
    paths: LedgerPaths,
    transactions: RwLock<Vec<TransactionRow>>,
    shared_expenses: RwLock<Vec<SharedExpenseRow>>,
    categories: RwLock<Vec<CategoryRow>>,
}

fn read_lock<T>(lock: &RwLock<T>) -> LedgerResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| LedgerError::Store(format!("Failed to acquire read lock: {}", e)))
}

fn write_lock<T>(lock: &RwLock<T>) -> LedgerResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| LedgerError::Store(format!("Failed to acquire write lock: {}", e)))
}

impl JsonStore {
    /// Open the store, creating directories and loading any existing rows
    pub fn open(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let transactions: TransactionData = read_json(paths.transactions_file())?;
        let shared_expenses: SharedExpenseData = read_json(paths.shared_expenses_file())?;
        let categories: CategoryData = read_json(paths.categories_file())?;

        debug!(
            transactions = transactions.transactions.len(),
            shared_expenses = shared_expenses.shared_expenses.len(),
            categories = categories.categories.len(),
            "loaded json store"
        );

        Ok(Self {
            paths,
            transactions: RwLock::new(transactions.transactions),
            shared_expenses: RwLock::new(shared_expenses.shared_expenses),
            categories: RwLock::new(categories.categories),
        })
    }

    /// Add a category, rejecting a name the owner can already see
    pub fn insert_category(&self, category: Category) -> LedgerResult<Category> {
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut categories = write_lock(&self.categories)?;
        let clash = categories.iter().any(|c| {
            c.name == category.name
                && c.kind == category.kind
                && (c.owner_id == category.owner_id || c.is_global())
        });
        if clash {
            return Err(LedgerError::Validation(format!(
                "Category '{}' already exists",
                category.name
            )));
        }

        let mut data = CategoryData {
            categories: categories.clone(),
        };
        data.categories.push(category.clone());
        save(&self.paths.categories_file(), &data)?;
        *categories = data.categories;
        Ok(category)
    }

    /// Resolve the display fields of a category id, the way a joined select would
    fn join_category(
        categories: &[CategoryRow],
        category_id: Option<CategoryId>,
    ) -> Option<CategoryRef> {
        let id = category_id?;
        categories.iter().find(|c| c.id == id).map(Category::to_ref)
    }
}

fn save<T: Serialize>(path: &Path, data: &T) -> LedgerResult<()> {
    write_json_atomic(path, data)
}

#[async_trait]
impl LedgerStore for JsonStore {
    async fn fetch_transactions(&self, owner_id: OwnerId) -> LedgerResult<Vec<TransactionRow>> {
        let rows = read_lock(&self.transactions)?;
        let categories = read_lock(&self.categories)?;

        Ok(rows
            .iter()
            .filter(|row| row.owner_id == owner_id)
            .map(|row| {
                let mut row = row.clone();
                row.category = Self::join_category(&categories, row.category_id);
                row
            })
            .collect())
    }

    async fn fetch_shared_expenses(
        &self,
        owner_id: OwnerId,
        owner_email: &str,
    ) -> LedgerResult<Vec<SharedExpenseRow>> {
        let rows = read_lock(&self.shared_expenses)?;
        let categories = read_lock(&self.categories)?;
        let email = owner_email.trim();

        Ok(rows
            .iter()
            .filter(|row| {
                row.owner_id == owner_id
                    || row
                        .participants
                        .iter()
                        .any(|p| p.trim().eq_ignore_ascii_case(email))
            })
            .map(|row| {
                let mut row = row.clone();
                row.category = Self::join_category(&categories, row.category_id);
                row
            })
            .collect())
    }

    async fn fetch_categories(&self, owner_id: OwnerId) -> LedgerResult<Vec<CategoryRow>> {
        let categories = read_lock(&self.categories)?;

        let mut visible: Vec<CategoryRow> = categories
            .iter()
            .filter(|c| c.is_global() || c.owner_id == Some(owner_id))
            .cloned()
            .collect();
        visible.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(visible)
    }

    async fn insert_transaction(&self, row: NewTransactionRow) -> LedgerResult<TransactionRow> {
        let row = row.into_row(TransactionId::new());

        let mut rows = write_lock(&self.transactions)?;
        let mut data = TransactionData {
            transactions: rows.clone(),
        };
        data.transactions.push(row.clone());
        save(&self.paths.transactions_file(), &data)?;
        *rows = data.transactions;

        debug!(id = %row.id, "inserted transaction row");
        Ok(row)
    }

    async fn insert_shared_expense(
        &self,
        row: NewSharedExpenseRow,
    ) -> LedgerResult<SharedExpenseRow> {
        let row = row.into_row(TransactionId::new());

        let mut rows = write_lock(&self.shared_expenses)?;
        let mut data = SharedExpenseData {
            shared_expenses: rows.clone(),
        };
        data.shared_expenses.push(row.clone());
        save(&self.paths.shared_expenses_file(), &data)?;
        *rows = data.shared_expenses;

        debug!(id = %row.id, "inserted shared expense row");
        Ok(row)
    }

    async fn delete_transaction(&self, id: TransactionId) -> LedgerResult<()> {
        let mut rows = write_lock(&self.transactions)?;
        if !rows.iter().any(|row| row.id == id) {
            return Err(LedgerError::transaction_not_found(id.to_string()));
        }

        let data = TransactionData {
            transactions: rows.iter().filter(|row| row.id != id).cloned().collect(),
        };
        save(&self.paths.transactions_file(), &data)?;
        *rows = data.transactions;
        Ok(())
    }

    async fn delete_shared_expense(&self, id: TransactionId) -> LedgerResult<()> {
        let mut rows = write_lock(&self.shared_expenses)?;
        if !rows.iter().any(|row| row.id == id) {
            return Err(LedgerError::transaction_not_found(id.to_string()));
        }

        let data = SharedExpenseData {
            shared_expenses: rows.iter().filter(|row| row.id != id).cloned().collect(),
        };
        save(&self.paths.shared_expenses_file(), &data)?;
        *rows = data.shared_expenses;
        Ok(())
    }
}
