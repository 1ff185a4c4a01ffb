//! Service layer for splitledger
//!
//! The service layer sits on top of the storage layer, handling validation,
//! share computation, snapshot refreshes and outcome notifications.

pub mod ledger;

pub use ledger::{AddEntryInput, LedgerService};
