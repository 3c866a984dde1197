//! Weighted spawn tables - pick entity prototypes proportionally to weight
//!
//! A spawn table is an ordered list of [`SpawnEntry`] rows authored in
//! external data. [`SpawnCollection`] normalizes the rows once (cumulative
//! weight prefix array) so repeated draws are a single `gen_range` plus a
//! binary search. Collections are read-only after construction, so a cached
//! collection can be shared freely.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How many instances a selected entry produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpawnAmount {
    /// Always this many.
    Fixed(u32),
    /// Uniform in `min..=max`.
    Range { min: u32, max: u32 },
}

impl Default for SpawnAmount {
    fn default() -> Self {
        SpawnAmount::Fixed(1)
    }
}

impl SpawnAmount {
    /// Roll the instance count for one selection.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        match *self {
            SpawnAmount::Fixed(n) => n,
            SpawnAmount::Range { min, max } => {
                let lo = min.min(max);
                let hi = min.max(max);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// One row of a spawn table: a prototype reference, its selection weight,
/// and how many instances a selection produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    /// Opaque key of the entity definition to spawn.
    pub prototype: String,
    /// Selection likelihood relative to the other entries. Must be finite
    /// and non-negative; zero-weight entries are never selected.
    #[serde(default = "default_weight")]
    pub weight: f32,
    /// Instances per selection.
    #[serde(default)]
    pub amount: SpawnAmount,
}

fn default_weight() -> f32 {
    1.0
}

impl SpawnEntry {
    pub fn new(prototype: impl Into<String>, weight: f32) -> Self {
        Self {
            prototype: prototype.into(),
            weight,
            amount: SpawnAmount::default(),
        }
    }

    pub fn with_amount(mut self, amount: SpawnAmount) -> Self {
        self.amount = amount;
        self
    }
}

/// Sampling was attempted against a table with no positive-weight entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTable;

impl std::fmt::Display for EmptyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spawn table has no entries with positive weight")
    }
}

impl std::error::Error for EmptyTable {}

/// A normalized, immutable view of a spawn table.
///
/// Entries with non-positive (or non-finite) weight are dropped at
/// construction so the degenerate cases are handled once, here, instead of
/// on every draw. Entry `i` owns the half-open interval
/// `[cumulative[i-1], cumulative[i])` of the total weight range.
#[derive(Debug, Clone)]
pub struct SpawnCollection {
    entries: Vec<SpawnEntry>,
    cumulative: Vec<f32>,
    total_weight: f32,
}

impl SpawnCollection {
    /// Build the normalized view. Never fails: an empty input, or one whose
    /// weights are all zero, yields an empty collection whose `sample`
    /// reports [`EmptyTable`].
    pub fn new(entries: Vec<SpawnEntry>) -> Self {
        let entries: Vec<SpawnEntry> = entries
            .into_iter()
            .filter(|e| e.weight.is_finite() && e.weight > 0.0)
            .collect();

        let mut cumulative = Vec::with_capacity(entries.len());
        let mut total = 0.0f32;
        for entry in &entries {
            total += entry.weight;
            cumulative.push(total);
        }

        Self {
            entries,
            cumulative,
            total_weight: total,
        }
    }

    /// Number of selectable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry can ever be selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all selectable weights.
    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    /// The selectable entries, in authored order.
    pub fn entries(&self) -> &[SpawnEntry] {
        &self.entries
    }

    /// Draw one entry with probability proportional to its weight.
    pub fn sample(&self, rng: &mut impl Rng) -> Result<&SpawnEntry, EmptyTable> {
        if self.is_empty() {
            return Err(EmptyTable);
        }

        let roll = rng.gen_range(0.0..self.total_weight);
        Ok(self.entry_at(roll))
    }

    /// Draw `n` entries independently, with replacement. The emptiness check
    /// happens once, up front; the draws themselves are lazy.
    pub fn sample_many<'a, R: Rng>(
        &'a self,
        rng: &'a mut R,
        n: usize,
    ) -> Result<impl Iterator<Item = &'a SpawnEntry> + 'a, EmptyTable> {
        if self.is_empty() {
            return Err(EmptyTable);
        }

        Ok((0..n).map(move |_| {
            let roll = rng.gen_range(0.0..self.total_weight);
            self.entry_at(roll)
        }))
    }

    /// Locate the entry whose cumulative interval contains `roll`.
    ///
    /// `partition_point` returns the first index whose cumulative sum
    /// exceeds `roll`, which is exactly the half-open interval owner. The
    /// clamp guards the last interval: summation order can leave the final
    /// cumulative value a few ulps short of `total_weight`, and a roll in
    /// that sliver must still land on the last entry.
    fn entry_at(&self, roll: f32) -> &SpawnEntry {
        let idx = self.cumulative.partition_point(|&c| c <= roll);
        let idx = idx.min(self.entries.len() - 1);
        &self.entries[idx]
    }
}

impl FromIterator<SpawnEntry> for SpawnCollection {
    fn from_iter<T: IntoIterator<Item = SpawnEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
