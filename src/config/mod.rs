//! Configuration module for splitledger
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (owner identity, reporting preferences)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{ExportFormat, Settings};
