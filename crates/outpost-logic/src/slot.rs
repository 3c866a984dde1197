//! Storage slot policy - when a single-occupant slot accepts or releases
//!
//! The slot itself (a named container on an entity) lives in the host
//! engine; this module only decides whether an insert or eject may proceed
//! given the slot's current occupancy. Keeping the decision pure lets the
//! quirky legacy behavior sit behind a named flag instead of being buried
//! in an event handler.

use serde::{Deserialize, Serialize};

/// Gate applied before an entity is inserted into a storage slot.
///
/// The shipped cryo storage content only proceeds with an insert when the
/// container already holds something - the inverse of the intuitive
/// "insert only when empty" rule, and almost certainly an inverted check in
/// the original content. Both behaviors are kept here so entity definitions
/// can pick one explicitly; the default preserves the shipped behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPolicy {
    /// Insert proceeds only if the container already holds an entity
    /// (placeholder or prior occupant). Shipped behavior.
    RequireExistingOccupant,
    /// Insert proceeds only if the container is empty.
    RequireEmpty,
}

impl Default for InsertPolicy {
    fn default() -> Self {
        InsertPolicy::RequireExistingOccupant
    }
}

/// Whether an insert may proceed against a slot in the given occupancy state.
pub fn insert_allowed(policy: InsertPolicy, occupied: bool) -> bool {
    match policy {
        InsertPolicy::RequireExistingOccupant => occupied,
        InsertPolicy::RequireEmpty => !occupied,
    }
}

/// Whether an eject may proceed. Ejecting an empty slot is a no-op.
pub fn eject_allowed(occupied: bool) -> bool {
    occupied
}
