//! Loading spawn table definitions from external JSON data.
//!
//! Tables are authored alongside entity definitions and loaded once at
//! startup; validation happens here so a bad weight is reported with the
//! table and prototype named instead of surfacing as a skewed distribution
//! at runtime.

use outpost_logic::spawn_table::SpawnEntry;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Named debris spawn tables, as authored in a definitions file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebrisTables {
    pub tables: HashMap<String, Vec<SpawnEntry>>,
}

impl DebrisTables {
    pub fn get(&self, name: &str) -> Option<&[SpawnEntry]> {
        self.tables.get(name).map(Vec::as_slice)
    }
}

/// Errors that can occur while loading spawn table definitions
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidWeight {
        table: String,
        prototype: String,
        weight: f32,
    },
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::InvalidWeight {
                table,
                prototype,
                weight,
            } => write!(
                f,
                "invalid weight {} for prototype '{}' in table '{}'",
                weight, prototype, table
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::InvalidWeight { .. } => None,
        }
    }
}

/// Load and validate debris spawn tables from a reader.
///
/// Zero weights are legal (the entry is authored but disabled); negative or
/// non-finite weights are authoring errors and rejected.
pub fn load_debris_tables<R: Read>(mut reader: R) -> Result<DebrisTables, ConfigError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let tables: DebrisTables = serde_json::from_str(&raw)?;

    for (name, entries) in &tables.tables {
        for entry in entries {
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    table: name.clone(),
                    prototype: entry.prototype.clone(),
                    weight: entry.weight,
                });
            }
        }
    }

    Ok(tables)
}
