//! Evaluate growth rules at a level
//!
//! [`compute_value`] is the pure evaluation. [`StatInterpolator`] wraps it
//! with a memo cache keyed by (skill, growth data, attribute, level).

use crate::core::cache::BoundedCache;
use crate::core::types::{Level, SkillId};
use crate::skills::{Attribute, AttributeGrowth, Skill};
use crate::stats::growth::{LevelGrowthRule, StatValue};

/// Magnitude of `rule` at `level`
///
/// Levels below 1 read as level 1 for the modifier rules. Never panics;
/// non-finite results are reported as unavailable.
pub fn compute_value(rule: &LevelGrowthRule, level: Level) -> StatValue {
    match rule {
        LevelGrowthRule::Flat {
            base,
            per_level_delta,
        } => StatValue::from_f64(flat_value(*base, *per_level_delta, level)),
        LevelGrowthRule::ModifierArray { base, deltas } => {
            StatValue::from_f64(modifier_array_value(*base, deltas, level))
        }
        LevelGrowthRule::LevelTable(table) => table.resolve(level),
    }
}

fn flat_value(base: f64, per_level_delta: f64, level: Level) -> f64 {
    let steps = (i64::from(level) - 1).max(0);
    base + per_level_delta * steps as f64
}

/// `deltas[i]` is the increment for reaching level `i + 2`.
///
/// Past the end of the array the total keeps growing by the last delta,
/// counted from the first overflow level inclusive. That means the last
/// delta is applied twice when stepping onto the first level beyond the
/// array.
fn modifier_array_value(base: f64, deltas: &[f64], level: Level) -> f64 {
    let Some(&last) = deltas.last() else {
        return base;
    };
    let index = i64::from(level) - 2;
    if index < 0 {
        return base;
    }
    let len = deltas.len() as i64;
    if index < len {
        return base + deltas[..=index as usize].iter().sum::<f64>();
    }
    let total: f64 = deltas.iter().sum();
    base + total + last * (index - len + 1) as f64
}

/// Memoizing front end for attribute lookups on skills
///
/// Entries are keyed by the skill id together with the fingerprint of the
/// attribute's growth data, so a skill rebuilt under the same id with new
/// data misses the cache instead of reading the old value.
#[derive(Debug)]
pub struct StatInterpolator {
    cache: BoundedCache<StatKey, StatValue>,
}

type StatKey = (SkillId, Option<u64>, Attribute, Level);

impl StatInterpolator {
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            cache: BoundedCache::new(cache_capacity),
        }
    }

    /// Value of `attribute` on `skill` at `level`
    ///
    /// A skill without the attribute yields `Unavailable`.
    pub fn value_for(&self, skill: &Skill, attribute: Attribute, level: Level) -> StatValue {
        let growth = skill.attribute(attribute);
        let key = (
            skill.id.clone(),
            growth.map(AttributeGrowth::fingerprint),
            attribute,
            level,
        );
        self.cache.get_or_insert_with(key, || {
            match growth.and_then(AttributeGrowth::rule) {
                Some(rule) => compute_value(&rule, level),
                None => StatValue::Unavailable,
            }
        })
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl Default for StatInterpolator {
    fn default() -> Self {
        Self::new(1000)
    }
}
