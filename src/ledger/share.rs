//! Share calculator
//!
//! A shared expense is split equally between the owner and every other
//! participant.

use crate::models::{Money, Owner};

/// The owner's share of `total` split with `participant_count` other people
///
/// The divisor is `participant_count + 1` because the owner always takes a
/// part. No rounding is applied here.
pub fn compute_share(total: Money, participant_count: usize) -> Money {
    total / (participant_count as f64 + 1.0)
}

/// Parse a comma-separated participant list
///
/// Parts are trimmed, empty parts dropped and duplicates (case-insensitive)
/// removed keeping the first spelling. The owner's own contact is dropped
/// since the owner is already counted by the split.
pub fn parse_participants(raw: &str, owner: Option<&Owner>) -> Vec<String> {
    let mut participants: Vec<String> = Vec::new();

    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if owner.is_some_and(|o| o.is_contact(part)) {
            continue;
        }
        if participants.iter().any(|p| p.eq_ignore_ascii_case(part)) {
            continue;
        }
        participants.push(part.to_string());
    }

    participants
}
