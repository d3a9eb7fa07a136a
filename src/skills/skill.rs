//! Immutable skill records

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::cache::fingerprint_hasher;
use crate::core::types::SkillId;
use crate::skills::attribute::{Attribute, AttributeGrowth};
use crate::stats::LevelGrowthRule;

/// A skill as supplied by game data
///
/// Built once by the loader (or by hand in tests) and only read afterwards.
/// Rebuilding with [`Skill::with_attribute`] keeps the id but yields a new
/// [`Skill::fingerprint`], which is what caches key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Description template with `{{TOKEN}}` placeholders
    pub description: String,
    attributes: BTreeMap<Attribute, AttributeGrowth>,
}

impl Skill {
    pub fn new(id: impl Into<SkillId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set growth data for an attribute; empty growth data is dropped
    pub fn with_attribute(mut self, attribute: Attribute, growth: AttributeGrowth) -> Self {
        if growth.is_empty() {
            self.attributes.remove(&attribute);
        } else {
            self.attributes.insert(attribute, growth);
        }
        self
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<&AttributeGrowth> {
        self.attributes.get(&attribute)
    }

    /// Growth rule for an attribute, `None` if the skill lacks it
    pub fn rule(&self, attribute: Attribute) -> Option<LevelGrowthRule> {
        self.attributes.get(&attribute).and_then(AttributeGrowth::rule)
    }

    /// Content fingerprint of all attribute growth data
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = fingerprint_hasher();
        self.attributes.len().hash(&mut hasher);
        for (attribute, growth) in &self.attributes {
            attribute.hash(&mut hasher);
            growth.hash_into(&mut hasher);
        }
        hasher.finish()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, &AttributeGrowth)> {
        self.attributes.iter().map(|(a, g)| (*a, g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LevelTable;

    #[test]
    fn test_builder() {
        let skill = Skill::new("cleave", "Cleave")
            .with_description("Deals {{DMG_MIN}} damage")
            .with_attribute(Attribute::DamageMin, AttributeGrowth::flat(100.0, 10.0));

        assert_eq!(skill.id, SkillId::from("cleave"));
        assert_eq!(skill.description, "Deals {{DMG_MIN}} damage");
        assert!(skill.attribute(Attribute::DamageMin).is_some());
        assert!(skill.attribute(Attribute::DamageMax).is_none());
        assert_eq!(skill.rule(Attribute::DamageMax), None);
    }

    #[test]
    fn test_empty_growth_is_not_stored() {
        let skill = Skill::new("x", "X").with_attribute(Attribute::Duration, AttributeGrowth::default());
        assert_eq!(skill.attributes().count(), 0);
    }

    #[test]
    fn test_fingerprint_changes_on_rebuild() {
        let base = Skill::new("s", "S")
            .with_attribute(Attribute::DamageMin, AttributeGrowth::flat(100.0, 0.0));
        let same = Skill::new("s", "Renamed")
            .with_attribute(Attribute::DamageMin, AttributeGrowth::flat(100.0, 0.0));
        let rebuilt = base
            .clone()
            .with_attribute(Attribute::DamageMin, AttributeGrowth::flat(999.0, 0.0));
        let extended = base
            .clone()
            .with_attribute(Attribute::Duration, AttributeGrowth::flat(3.0, 0.0));

        assert_eq!(base.fingerprint(), same.fingerprint());
        assert_ne!(base.fingerprint(), rebuilt.fingerprint());
        assert_ne!(base.fingerprint(), extended.fingerprint());
    }

    #[test]
    fn test_rule_from_table() {
        let skill = Skill::new("x", "X").with_attribute(
            Attribute::Duration,
            AttributeGrowth::table(LevelTable::new().with(1, 5.0)),
        );
        assert!(matches!(
            skill.rule(Attribute::Duration),
            Some(LevelGrowthRule::LevelTable(_))
        ));
    }
}
