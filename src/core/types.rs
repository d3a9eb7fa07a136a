//! Core type definitions used throughout the codebase

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Skill level as requested by the caller. Any integer is accepted;
/// values below 1 are handled by each growth rule.
pub type Level = i32;

/// Stable identifier of a skill record
///
/// Skills are immutable, so the id doubles as the skill's identity
/// for memoization.
#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub String);

impl SkillId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_id_display_and_from() {
        let id = SkillId::from("ferocious_strike");
        assert_eq!(id.to_string(), "ferocious_strike");
        assert_eq!(id.as_str(), "ferocious_strike");
        assert_eq!(SkillId::from(String::from("ferocious_strike")), id);
    }

    #[test]
    fn test_skill_id_serializes_as_string() {
        let id = SkillId::from("heal");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"heal\"");
        let back: SkillId = serde_json::from_str("\"heal\"").unwrap();
        assert_eq!(back, id);
    }
}
