//! Growth rules and computed stat values

use serde::{Deserialize, Serialize};

use crate::stats::table::LevelTable;

/// How an attribute's magnitude scales with skill level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelGrowthRule {
    /// `base + per_level_delta * (level - 1)`
    Flat { base: f64, per_level_delta: f64 },
    /// `deltas[i]` is added when reaching level `i + 2`; levels past the
    /// array keep extrapolating with the last delta
    ModifierArray { base: f64, deltas: Vec<f64> },
    /// Explicit per-level lookup
    LevelTable(LevelTable),
}

impl LevelGrowthRule {
    /// Flat rule with absent parts read as 0
    pub fn flat(base: Option<f64>, per_level_delta: Option<f64>) -> Self {
        LevelGrowthRule::Flat {
            base: base.unwrap_or(0.0),
            per_level_delta: per_level_delta.unwrap_or(0.0),
        }
    }

    /// Modifier-array rule with an absent base read as 0
    pub fn modifier_array(base: Option<f64>, deltas: Vec<f64>) -> Self {
        LevelGrowthRule::ModifierArray {
            base: base.unwrap_or(0.0),
            deltas,
        }
    }
}

impl From<LevelTable> for LevelGrowthRule {
    fn from(table: LevelTable) -> Self {
        LevelGrowthRule::LevelTable(table)
    }
}

/// Result of evaluating a growth rule at a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatValue {
    Value(f64),
    /// No value exists for the level, or the stored number is malformed
    Unavailable,
}

impl StatValue {
    /// Wrap a computed number; NaN and infinities count as unavailable
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            StatValue::Value(value)
        } else {
            StatValue::Unavailable
        }
    }

    pub fn as_option(&self) -> Option<f64> {
        match self {
            StatValue::Value(v) => Some(*v),
            StatValue::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, StatValue::Value(_))
    }
}

impl From<StatValue> for Option<f64> {
    fn from(value: StatValue) -> Self {
        value.as_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_defaults_absent_parts() {
        assert_eq!(
            LevelGrowthRule::flat(None, Some(5.0)),
            LevelGrowthRule::Flat { base: 0.0, per_level_delta: 5.0 }
        );
        assert_eq!(
            LevelGrowthRule::flat(Some(10.0), None),
            LevelGrowthRule::Flat { base: 10.0, per_level_delta: 0.0 }
        );
    }

    #[test]
    fn test_stat_value_from_f64() {
        assert_eq!(StatValue::from_f64(3.5), StatValue::Value(3.5));
        assert_eq!(StatValue::from_f64(f64::NAN), StatValue::Unavailable);
        assert_eq!(StatValue::from_f64(f64::INFINITY), StatValue::Unavailable);
        assert_eq!(StatValue::Value(2.0).as_option(), Some(2.0));
        assert!(!StatValue::Unavailable.is_available());
    }

    #[test]
    fn test_rule_serde_shape() {
        let rule: LevelGrowthRule =
            serde_json::from_str(r#"{"modifier_array": {"base": 100, "deltas": [20, 30]}}"#)
                .unwrap();
        assert_eq!(rule, LevelGrowthRule::modifier_array(Some(100.0), vec![20.0, 30.0]));
    }
}
