//! Load skill catalogs from JSON or TOML game data
//!
//! Data files are flat records in the shape the game-data export produces:
//! attribute fields sit directly on each skill (`damageMin`,
//! `damageMinModifier`, `damageMinModifiers`) and optional per-level rows
//! live under `levels`. String field names are resolved to [`Attribute`]
//! here, once, so nothing downstream looks fields up by name.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{CalcError, Result};
use crate::core::types::{Level, SkillId};
use crate::skills::attribute::{Attribute, AttributeGrowth};
use crate::skills::skill::Skill;
use crate::stats::{LevelTable, TableValue};

/// All skills known to the application, keyed by id
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: BTreeMap<SkillId, Skill>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill; ids must be unique
    pub fn insert(&mut self, skill: Skill) -> Result<()> {
        if self.skills.contains_key(&skill.id) {
            return Err(CalcError::DuplicateSkill(skill.id));
        }
        self.skills.insert(skill.id.clone(), skill);
        Ok(())
    }

    pub fn from_skills(skills: impl IntoIterator<Item = Skill>) -> Result<Self> {
        let mut catalog = Self::new();
        for skill in skills {
            catalog.insert(skill)?;
        }
        Ok(catalog)
    }

    pub fn get(&self, id: &SkillId) -> Option<&Skill> {
        self.skills.get(id)
    }

    /// Skills in id order
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Load a catalog, picking the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let parse: fn(&str) -> Result<Self> = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(CalcError::UnsupportedFormat(path.display().to_string())),
        };
        let content = std::fs::read_to_string(path)?;
        let catalog = parse(&content)?;
        tracing::debug!(path = %path.display(), skills = catalog.len(), "loaded skill catalog");
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: SkillFile = serde_json::from_str(content)?;
        file.into_catalog()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SkillFile = toml::from_str(content)?;
        file.into_catalog()
    }
}

/// On-disk representation of a catalog
#[derive(Debug, Deserialize)]
struct SkillFile {
    #[serde(default)]
    skills: Vec<RawSkill>,
}

impl SkillFile {
    fn into_catalog(self) -> Result<SkillCatalog> {
        let skills = self
            .skills
            .into_iter()
            .map(RawSkill::into_skill)
            .collect::<Result<Vec<_>>>()?;
        SkillCatalog::from_skills(skills)
    }
}

/// On-disk representation of one skill
#[derive(Debug, Deserialize)]
struct RawSkill {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    /// Level number -> attribute base name -> cell
    #[serde(default)]
    levels: BTreeMap<String, BTreeMap<String, Value>>,
    /// Attribute fields plus whatever else the export carries
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl RawSkill {
    fn into_skill(self) -> Result<Skill> {
        let id = SkillId::from(self.id);
        let mut tables = level_tables(&id, self.levels)?;

        let mut skill = Skill::new(id.clone(), self.name).with_description(self.description);
        for attribute in Attribute::ALL {
            let growth = AttributeGrowth {
                base: number_field(&id, &self.fields, attribute.field_name()),
                modifier: number_field(&id, &self.fields, &attribute.modifier_field()),
                modifiers: deltas_field(&id, &self.fields, &attribute.modifiers_field()),
                table: tables.remove(&attribute),
            };
            skill = skill.with_attribute(attribute, growth);
        }
        Ok(skill)
    }
}

/// Pivot per-level rows into one table per attribute
fn level_tables(
    id: &SkillId,
    levels: BTreeMap<String, BTreeMap<String, Value>>,
) -> Result<BTreeMap<Attribute, LevelTable>> {
    let mut tables: BTreeMap<Attribute, LevelTable> = BTreeMap::new();
    for (key, row) in levels {
        let level: Level = key.trim().parse().map_err(|_| CalcError::InvalidSkill {
            id: id.clone(),
            reason: format!("level key '{}' is not an integer", key),
        })?;
        for (field, value) in row {
            let Some(attribute) = Attribute::from_field_name(&field) else {
                tracing::debug!(skill = %id, field = %field, level, "ignoring unknown level column");
                continue;
            };
            if let Some(cell) = table_cell(value) {
                tables.entry(attribute).or_default().insert(level, cell);
            }
        }
    }
    Ok(tables)
}

fn table_cell(value: Value) -> Option<TableValue> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64().map(TableValue::Number),
        Value::String(s) => Some(TableValue::Text(s)),
        Value::Bool(b) => Some(TableValue::Text(if b { "TRUE" } else { "FALSE" }.to_string())),
        other => Some(TableValue::Text(other.to_string())),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Numeric field; non-numeric data is logged and treated as absent
fn number_field(id: &SkillId, fields: &BTreeMap<String, Value>, name: &str) -> Option<f64> {
    let value = fields.get(name)?;
    if value.is_null() {
        return None;
    }
    let number = as_number(value);
    if number.is_none() {
        tracing::warn!(skill = %id, field = name, value = %value, "ignoring non-numeric field");
    }
    number
}

/// Delta array; an array with any non-numeric element is ignored whole,
/// since skipping one element would shift every later level
fn deltas_field(id: &SkillId, fields: &BTreeMap<String, Value>, name: &str) -> Option<Vec<f64>> {
    let value = fields.get(name)?;
    let deltas = match value {
        Value::Null => return None,
        Value::Array(items) => items.iter().map(as_number).collect::<Option<Vec<f64>>>(),
        _ => None,
    };
    if deltas.is_none() {
        tracing::warn!(skill = %id, field = name, value = %value, "ignoring malformed modifier array");
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LevelGrowthRule;

    const SAMPLE_JSON: &str = r#"{
        "skills": [
            {
                "id": "fierce_strike",
                "name": "Fierce Strike",
                "description": "Deals {{DMG_MIN}} damage",
                "damageMin": 100,
                "damageMinModifier": 10,
                "cooldown": 8
            },
            {
                "id": "healing_light",
                "name": "Healing Light",
                "healMin": "50",
                "healMinModifiers": [5, 5, 10],
                "levels": {
                    "1": { "duration": 4 },
                    "2": { "duration": "FALSE", "unknownColumn": 1 }
                }
            }
        ]
    }"#;

    #[test]
    fn test_load_json() {
        let catalog = SkillCatalog::from_json_str(SAMPLE_JSON).unwrap();
        assert_eq!(catalog.len(), 2);

        let strike = catalog.get(&SkillId::from("fierce_strike")).unwrap();
        assert_eq!(strike.description, "Deals {{DMG_MIN}} damage");
        assert_eq!(
            strike.rule(Attribute::DamageMin),
            Some(LevelGrowthRule::Flat { base: 100.0, per_level_delta: 10.0 })
        );

        let heal = catalog.get(&SkillId::from("healing_light")).unwrap();
        assert_eq!(heal.description, "");
        assert_eq!(
            heal.rule(Attribute::HealMin),
            Some(LevelGrowthRule::ModifierArray { base: 50.0, deltas: vec![5.0, 5.0, 10.0] })
        );
        let duration = heal.attribute(Attribute::Duration).unwrap();
        assert_eq!(duration.table.as_ref().map(LevelTable::len), Some(2));
    }

    #[test]
    fn test_iteration_is_sorted_by_id() {
        let catalog = SkillCatalog::from_json_str(SAMPLE_JSON).unwrap();
        let ids: Vec<_> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["fierce_strike", "healing_light"]);
    }

    #[test]
    fn test_non_numeric_field_is_ignored() {
        let catalog = SkillCatalog::from_json_str(
            r#"{"skills": [{"id": "a", "name": "A", "damageMin": "lots", "damageMinModifier": 2}]}"#,
        )
        .unwrap();
        let skill = catalog.get(&SkillId::from("a")).unwrap();
        assert_eq!(
            skill.rule(Attribute::DamageMin),
            Some(LevelGrowthRule::Flat { base: 0.0, per_level_delta: 2.0 })
        );
    }

    #[test]
    fn test_malformed_delta_array_is_ignored() {
        let catalog = SkillCatalog::from_json_str(
            r#"{"skills": [{"id": "a", "name": "A", "attack": 5, "attackModifiers": [1, "x"]}]}"#,
        )
        .unwrap();
        let skill = catalog.get(&SkillId::from("a")).unwrap();
        assert_eq!(
            skill.rule(Attribute::Attack),
            Some(LevelGrowthRule::Flat { base: 5.0, per_level_delta: 0.0 })
        );
    }

    #[test]
    fn test_bad_level_key_is_an_error() {
        let result = SkillCatalog::from_json_str(
            r#"{"skills": [{"id": "a", "name": "A", "levels": {"one": {"duration": 1}}}]}"#,
        );
        assert!(matches!(result, Err(CalcError::InvalidSkill { .. })));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = SkillCatalog::from_json_str(
            r#"{"skills": [{"id": "a", "name": "A"}, {"id": "a", "name": "Again"}]}"#,
        );
        assert!(matches!(result, Err(CalcError::DuplicateSkill(_))));
    }

    #[test]
    fn test_load_toml() {
        let catalog = SkillCatalog::from_toml_str(
            r#"
            [[skills]]
            id = "shield_wall"
            name = "Shield Wall"
            description = "Blocks {{BLOCK_DAMAGE}} damage for {{DURATION}}s"
            blockDamage = 300
            blockDamageModifier = 25.5

            [skills.levels.1]
            duration = 6
            [skills.levels.2]
            duration = "7"
            "#,
        )
        .unwrap();
        let skill = catalog.get(&SkillId::from("shield_wall")).unwrap();
        assert_eq!(
            skill.rule(Attribute::BlockDamage),
            Some(LevelGrowthRule::Flat { base: 300.0, per_level_delta: 25.5 })
        );
        assert!(matches!(
            skill.rule(Attribute::Duration),
            Some(LevelGrowthRule::LevelTable(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SkillCatalog::load(Path::new("skills.yaml"));
        assert!(matches!(result, Err(CalcError::UnsupportedFormat(_))));

        let result = SkillCatalog::load(Path::new("definitely/missing/skills.json"));
        assert!(matches!(result, Err(CalcError::IoError(_))));
    }
}
