//! User settings for splitledger
//!
//! Holds the owner identity used for store reads plus reporting preferences
//! such as the rolling series length and the month matching rule.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::{MonthMatching, Owner};

/// Output format for exported reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Single `.xlsx` workbook with one worksheet per sheet
    #[default]
    Xlsx,
    /// Directory with one `.csv` file per sheet
    Csv,
}

impl ExportFormat {
    /// File extension used in the report file name
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// User settings for splitledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The identity whose ledger is being computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    /// Currency symbol used for terminal display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Display date format (strftime) used in exported sheets
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of buckets in the rolling monthly series
    #[serde(default = "default_months_back")]
    pub months_back: u32,

    /// How entry dates are matched against a month bucket
    #[serde(default)]
    pub month_matching: MonthMatching,

    /// Number of entries shown as recent activity
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Preferred export format
    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

fn default_months_back() -> u32 {
    6
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            owner: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            months_back: default_months_back(),
            month_matching: MonthMatching::default(),
            recent_limit: default_recent_limit(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// The configured owner, or a config error pointing at `init`
    pub fn require_owner(&self) -> Result<&Owner, LedgerError> {
        self.owner.as_ref().ok_or_else(|| {
            LedgerError::Config("No owner configured. Run 'splitledger init' first.".into())
        })
    }
}
