//! Explicit per-level lookup tables
//!
//! Game data tables store one row per level. Cells are usually numbers, but
//! hand-curated rows also carry numeric strings and a handful of non-numeric
//! markers that mean "no magnitude" and must read as zero.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::types::Level;
use crate::stats::growth::StatValue;

/// Exact non-numeric markers that resolve to 0
pub const SENTINELS: [&str; 4] = ["FALSE", "Debuff", "Vacant", "IgnoreOtherActor"];

/// Prefix marking a target-location reference, also resolved to 0
pub const TARGET_LOCATION_PREFIX: &str = "TargetLocation_";

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableValue {
    Number(f64),
    Text(String),
}

impl From<f64> for TableValue {
    fn from(value: f64) -> Self {
        TableValue::Number(value)
    }
}

impl From<&str> for TableValue {
    fn from(value: &str) -> Self {
        TableValue::Text(value.to_string())
    }
}

impl TableValue {
    /// Resolve the cell to a numeric value
    ///
    /// Sentinels give 0, numeric text is parsed, and text that is a number
    /// in form but not in value (`NaN`, infinities, blank) is unavailable.
    /// Anything else is a data-quality problem: logged and read as 0.
    pub fn resolve(&self, level: Level) -> StatValue {
        match self {
            TableValue::Number(n) => StatValue::from_f64(*n),
            TableValue::Text(raw) => {
                let text = raw.trim();
                if is_sentinel(text) {
                    return StatValue::Value(0.0);
                }
                if text.is_empty() {
                    return StatValue::Unavailable;
                }
                match text.parse::<f64>() {
                    Ok(n) => StatValue::from_f64(n),
                    Err(_) => {
                        tracing::warn!(
                            value = %raw,
                            level,
                            "malformed numeric string in level table, using 0"
                        );
                        StatValue::Value(0.0)
                    }
                }
            }
        }
    }
}

impl TableValue {
    /// Feed the cell's exact content into a fingerprint
    pub fn hash_into<H: Hasher>(&self, state: &mut H) {
        match self {
            TableValue::Number(n) => {
                0u8.hash(state);
                n.to_bits().hash(state);
            }
            TableValue::Text(text) => {
                1u8.hash(state);
                text.hash(state);
            }
        }
    }
}

/// True for the known non-numeric markers (case-sensitive)
pub fn is_sentinel(text: &str) -> bool {
    SENTINELS.contains(&text) || text.starts_with(TARGET_LOCATION_PREFIX)
}

/// Per-level lookup with no interpolation between rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    entries: BTreeMap<Level, TableValue>,
}

impl LevelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, level: Level, value: impl Into<TableValue>) {
        self.entries.insert(level, value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, level: Level, value: impl Into<TableValue>) -> Self {
        self.insert(level, value);
        self
    }

    pub fn get(&self, level: Level) -> Option<&TableValue> {
        self.entries.get(&level)
    }

    /// Value at exactly `level`; a missing row is unavailable, not 0
    pub fn resolve(&self, level: Level) -> StatValue {
        match self.entries.get(&level) {
            Some(cell) => cell.resolve(level),
            None => StatValue::Unavailable,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feed every row into a fingerprint
    pub fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        for (level, cell) in &self.entries {
            level.hash(state);
            cell.hash_into(state);
        }
    }

    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<(Level, TableValue)> for LevelTable {
    fn from_iter<T: IntoIterator<Item = (Level, TableValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
