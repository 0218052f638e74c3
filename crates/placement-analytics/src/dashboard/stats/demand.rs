use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;
use serde::Deserialize;
use std::hash::{Hash, Hasher};
use std::io::Read;
use std::path::Path;

/// Market demand per skill, the counterpart to the supply counted from records.
pub trait DemandSource {
    fn demand(&self, skill: &str) -> u32;
}

/// Explicit demand figures, e.g. from job-listing counts. Unlisted skills have no demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandTable {
    entries: IndexMap<String, u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum DemandLoadError {
    #[error("failed to read demand table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid demand CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct DemandRow {
    skill: String,
    demand: u32,
}

impl DemandTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DemandLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a `skill,demand` CSV. Later rows for the same skill replace earlier ones.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DemandLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = IndexMap::new();
        for row in csv_reader.deserialize::<DemandRow>() {
            let row = row?;
            if row.skill.is_empty() {
                continue;
            }
            entries.insert(row.skill, row.demand);
        }

        tracing::debug!(skills = entries.len(), "loaded skill demand table");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for DemandTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(skill, demand)| (skill.into(), demand))
                .collect(),
        }
    }
}

impl DemandSource for DemandTable {
    fn demand(&self, skill: &str) -> u32 {
        self.entries.get(skill).copied().unwrap_or(0)
    }
}

/// Placeholder demand in `20..120` for dashboards without a market data feed.
///
/// Each skill's figure is drawn from an RNG seeded with `seed` and a hash of the
/// skill name, so a given seed always yields the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDemand {
    pub seed: u64,
}

impl SimulatedDemand {
    pub const MIN: u32 = 20;
    pub const MAX_EXCLUSIVE: u32 = 120;

    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DemandSource for SimulatedDemand {
    fn demand(&self, skill: &str) -> u32 {
        let mut hasher = FxHasher::default();
        skill.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(self.seed ^ hasher.finish());
        rng.gen_range(Self::MIN..Self::MAX_EXCLUSIVE)
    }
}
