//! splitledger - personal and shared expense ledger
//!
//! This library merges personal income/expense entries and shared expenses
//! into one time-ordered ledger, computes the owner's share of every shared
//! expense, and derives category totals, monthly and daily series and an
//! exportable report from that ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, categories, money, months)
//! - `storage`: Store trait, raw rows and the JSON file store
//! - `ledger`: Normalization, merging, share computation and snapshots
//! - `reports`: Pure aggregations over the merged ledger
//! - `export`: Report workbook and its XLSX/CSV sinks
//! - `notify`: Outcome notifications
//! - `services`: The ledger service driving refreshes and mutations
//! - `display`: Terminal tables
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use splitledger::{config::{LedgerPaths, Settings}, notify::TracingNotifier};
//! use splitledger::services::LedgerService;
//! use splitledger::storage::JsonStore;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Arc::new(JsonStore::open(paths)?);
//! let mut service = LedgerService::new(store, Arc::new(TracingNotifier), settings.require_owner()?.clone());
//! service.refresh(&Default::default()).await?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod notify;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
