//! Owner identity
//!
//! The authenticated user whose ledger, categories and shares are computed.
//! The engine treats it as an opaque read-only context.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::OwnerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    /// Contact identifier used to match shared-expense participation
    pub email: String,
}

impl Owner {
    /// Create an owner with a fresh id
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: OwnerId::new(),
            email: email.into(),
        }
    }

    pub fn with_id(id: OwnerId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    /// Case-insensitive comparison against a participant identifier
    pub fn is_contact(&self, participant: &str) -> bool {
        self.email.eq_ignore_ascii_case(participant.trim())
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.email, self.id)
    }
}
