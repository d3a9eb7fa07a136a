//! Typed skill attributes and their per-level growth data

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::cache::fingerprint_hasher;
use crate::stats::{LevelGrowthRule, LevelTable};

/// A numeric skill attribute that descriptions can reference
///
/// Game data stores each attribute as three sibling fields: the base
/// value (`damageMin`), a flat per-level modifier (`damageMinModifier`)
/// and an optional delta array (`damageMinModifiers`). The string names
/// only matter when reading data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    // === DAMAGE ===
    DamageMin,
    DamageMax,
    DamagePerSecond,
    DamageBoost,
    DamageTolerance,
    Smite,

    // === HEALING ===
    HealMin,
    HealMax,
    HealBoost,
    IncomingHeal,

    // === RESOURCES ===
    MaxHp,
    MaxMp,
    MinMp,

    // === OFFENSE / DEFENSE ===
    Attack,
    Defense,
    BlockDamage,
    ProtectiveShield,
    CriticalHitResist,
    StatusEffectResist,
    ImpactTypeResist,
    ImpactTypeChance,

    // === MISC ===
    Duration,
    Enmity,
}

impl Attribute {
    pub const ALL: [Attribute; 23] = [
        Attribute::DamageMin,
        Attribute::DamageMax,
        Attribute::DamagePerSecond,
        Attribute::DamageBoost,
        Attribute::DamageTolerance,
        Attribute::Smite,
        Attribute::HealMin,
        Attribute::HealMax,
        Attribute::HealBoost,
        Attribute::IncomingHeal,
        Attribute::MaxHp,
        Attribute::MaxMp,
        Attribute::MinMp,
        Attribute::Attack,
        Attribute::Defense,
        Attribute::BlockDamage,
        Attribute::ProtectiveShield,
        Attribute::CriticalHitResist,
        Attribute::StatusEffectResist,
        Attribute::ImpactTypeResist,
        Attribute::ImpactTypeChance,
        Attribute::Duration,
        Attribute::Enmity,
    ];

    /// Base field name as it appears in game data
    pub fn field_name(&self) -> &'static str {
        match self {
            Attribute::DamageMin => "damageMin",
            Attribute::DamageMax => "damageMax",
            Attribute::DamagePerSecond => "damagePerSecond",
            Attribute::DamageBoost => "damageBoost",
            Attribute::DamageTolerance => "damageTolerance",
            Attribute::Smite => "smite",
            Attribute::HealMin => "healMin",
            Attribute::HealMax => "healMax",
            Attribute::HealBoost => "healBoost",
            Attribute::IncomingHeal => "incomingHeal",
            Attribute::MaxHp => "maxHP",
            Attribute::MaxMp => "maxMP",
            Attribute::MinMp => "minMP",
            Attribute::Attack => "attack",
            Attribute::Defense => "defense",
            Attribute::BlockDamage => "blockDamage",
            Attribute::ProtectiveShield => "protectiveShield",
            Attribute::CriticalHitResist => "criticalHitResist",
            Attribute::StatusEffectResist => "statusEffectResist",
            Attribute::ImpactTypeResist => "impactTypeResist",
            Attribute::ImpactTypeChance => "impactTypeChance",
            Attribute::Duration => "duration",
            Attribute::Enmity => "enmity",
        }
    }

    /// Flat per-level modifier field (`<base>Modifier`)
    pub fn modifier_field(&self) -> String {
        format!("{}Modifier", self.field_name())
    }

    /// Delta array field (`<base>Modifiers`)
    pub fn modifiers_field(&self) -> String {
        format!("{}Modifiers", self.field_name())
    }

    /// Reverse of [`Attribute::field_name`]
    pub fn from_field_name(name: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|a| a.field_name() == name)
    }
}

/// Growth data for one attribute of one skill
///
/// Every part is optional because data rows are sparse. A level table,
/// when present, wins over the modifier fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeGrowth {
    pub base: Option<f64>,
    pub modifier: Option<f64>,
    pub modifiers: Option<Vec<f64>>,
    pub table: Option<LevelTable>,
}

impl AttributeGrowth {
    /// Base value plus a flat per-level delta
    pub fn flat(base: f64, modifier: f64) -> Self {
        Self {
            base: Some(base),
            modifier: Some(modifier),
            ..Self::default()
        }
    }

    /// Base value plus an incremental delta per level
    pub fn with_deltas(base: f64, deltas: Vec<f64>) -> Self {
        Self {
            base: Some(base),
            modifiers: Some(deltas),
            ..Self::default()
        }
    }

    /// Explicit per-level values only
    pub fn table(table: LevelTable) -> Self {
        Self {
            table: Some(table),
            ..Self::default()
        }
    }

    /// True when no part is present; such an attribute has no value at any level
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.modifier.is_none() && self.modifiers.is_none() && self.table.is_none()
    }

    /// Feed the exact growth data into a fingerprint
    pub fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.base.map(f64::to_bits).hash(state);
        self.modifier.map(f64::to_bits).hash(state);
        match &self.modifiers {
            Some(deltas) => {
                deltas.len().hash(state);
                for delta in deltas {
                    delta.to_bits().hash(state);
                }
            }
            None => usize::MAX.hash(state),
        }
        match &self.table {
            Some(table) => {
                1u8.hash(state);
                table.hash_into(state);
            }
            None => 0u8.hash(state),
        }
    }

    /// Content fingerprint; changes whenever any part changes
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = fingerprint_hasher();
        self.hash_into(&mut hasher);
        hasher.finish()
    }

    /// Build the growth rule this data describes
    ///
    /// Returns `None` when nothing is present.
    pub fn rule(&self) -> Option<LevelGrowthRule> {
        if let Some(table) = &self.table {
            return Some(LevelGrowthRule::LevelTable(table.clone()));
        }
        match &self.modifiers {
            Some(deltas) if !deltas.is_empty() => {
                Some(LevelGrowthRule::modifier_array(self.base, deltas.clone()))
            }
            _ if self.is_empty() => None,
            _ => Some(LevelGrowthRule::flat(self.base, self.modifier)),
        }
    }
}
