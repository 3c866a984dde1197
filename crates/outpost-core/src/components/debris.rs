//! Debris selection component for procedural field generation.

use outpost_logic::spawn_table::{SpawnCollection, SpawnEntry};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Simple debris selection for simple biomes: just a spawn table.
///
/// The authored entries are kept as-is for serialization; the normalized
/// [`SpawnCollection`] is built on first query and cached for the lifetime
/// of the component. `OnceLock` makes the first-accessor-wins rule explicit
/// rather than relying on the host's single-threaded dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisSelector {
    /// The debris spawn table, straight from the entity definition.
    pub entries: Vec<SpawnEntry>,
    /// Derived data, rebuilt lazily after a load.
    #[serde(skip)]
    cache: OnceLock<SpawnCollection>,
}

impl DebrisSelector {
    pub fn new(entries: Vec<SpawnEntry>) -> Self {
        Self {
            entries,
            cache: OnceLock::new(),
        }
    }

    /// The normalized debris spawn table, built once on first access.
    pub fn table(&self) -> &SpawnCollection {
        self.cache
            .get_or_init(|| SpawnCollection::new(self.entries.clone()))
    }
}
