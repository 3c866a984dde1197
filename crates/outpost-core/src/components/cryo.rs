//! Cryogenic storage component.

use outpost_logic::slot::InsertPolicy;
use serde::{Deserialize, Serialize};

/// A cryo storage unit: one named container slot that can hold a body.
///
/// The container itself lives in the host's container subsystem; this
/// component only names the slot and selects the insertion policy. The
/// default policy matches the shipped content's observable behavior (see
/// [`InsertPolicy`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryoStorage {
    /// Key of the container on this entity that represents the body slot.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Gate applied before an insert proceeds.
    #[serde(default)]
    pub insert_policy: InsertPolicy,
}

fn default_container_id() -> String {
    "cryostorage-body-container".to_string()
}

impl Default for CryoStorage {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            insert_policy: InsertPolicy::default(),
        }
    }
}
