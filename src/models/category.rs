//! Category model
//!
//! Categories are either owner-specific or global (ownerless). Each one
//! belongs to exactly one of the income or expense groups; shared expenses
//! reuse the expense set.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, OwnerId};

/// Label used when an entry has no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Neutral display color used when a category carries none
pub const DEFAULT_CATEGORY_COLOR: &str = "hsl(var(--muted-foreground))";

/// The semantic group a category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// The display portion of a category attached to a ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    /// Symbolic icon key resolved by the presentation layer
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl CategoryRef {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// A category visible to the owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// Category name, unique per owner (case-sensitive)
    pub name: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub color: String,

    pub kind: CategoryKind,

    /// Owning user, or `None` for a global category
    #[serde(default)]
    pub owner_id: Option<OwnerId>,
}

impl Category {
    /// Create a new owner-specific category
    pub fn new(name: impl Into<String>, kind: CategoryKind, owner_id: OwnerId) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: String::new(),
            color: String::new(),
            kind,
            owner_id: Some(owner_id),
        }
    }

    /// Create a global category visible to every owner
    pub fn global(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: String::new(),
            color: String::new(),
            kind,
            owner_id: None,
        }
    }

    pub fn with_display(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }

    pub fn is_global(&self) -> bool {
        self.owner_id.is_none()
    }

    /// The reference stored alongside ledger entries
    pub fn to_ref(&self) -> CategoryRef {
        CategoryRef::new(self.name.clone(), self.icon.clone(), self.color.clone())
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
