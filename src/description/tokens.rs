//! Placeholder token vocabulary
//!
//! Maps each token name used in description text to the skill attribute it
//! reads and the category it is displayed with.

use crate::description::segment::SemanticCategory;
use crate::skills::Attribute;

/// One row of the token table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
    pub name: &'static str,
    pub attribute: Attribute,
    pub category: SemanticCategory,
}

const fn token(name: &'static str, attribute: Attribute, category: SemanticCategory) -> TokenSpec {
    TokenSpec {
        name,
        attribute,
        category,
    }
}

/// Canonical tokens, matched case-sensitively
pub const TOKEN_TABLE: &[TokenSpec] = &[
    token("DMG_MIN", Attribute::DamageMin, SemanticCategory::Damage),
    token("DMG_MAX", Attribute::DamageMax, SemanticCategory::Damage),
    token("DAMAGE_PER_SECOND", Attribute::DamagePerSecond, SemanticCategory::Damage),
    token("ATTACK_PERCENTAGE", Attribute::Attack, SemanticCategory::Percentage),
    token("MAX_HP_PERCENTAGE", Attribute::MaxHp, SemanticCategory::Percentage),
    token("MAX_HP", Attribute::MaxHp, SemanticCategory::Generic),
    token("MAX_MP_FLAT", Attribute::MaxMp, SemanticCategory::Generic),
    token("HEAL_MIN", Attribute::HealMin, SemanticCategory::Heal),
    token("HEAL_MAX", Attribute::HealMax, SemanticCategory::Heal),
    token("HEAL_BOOST_PERCENTAGE", Attribute::HealBoost, SemanticCategory::Percentage),
    token("DEFENSE_PERCENTAGE", Attribute::Defense, SemanticCategory::Percentage),
    token("CRITICAL_HIT_RESIST", Attribute::CriticalHitResist, SemanticCategory::Generic),
    token("INCOMING_HEAL_PERCENTAGE", Attribute::IncomingHeal, SemanticCategory::Percentage),
    token("BLOCK_DAMAGE", Attribute::BlockDamage, SemanticCategory::Generic),
    token("DAMAGE_BOOST_PERCENTAGE", Attribute::DamageBoost, SemanticCategory::Percentage),
    token("STATUS_EFFECT_RESIST", Attribute::StatusEffectResist, SemanticCategory::Generic),
    token("IMPACT_TYPE_RESIST", Attribute::ImpactTypeResist, SemanticCategory::Generic),
    token("DAMAGE_TOLERANCE", Attribute::DamageTolerance, SemanticCategory::Generic),
    token("DURATION", Attribute::Duration, SemanticCategory::Duration),
    token("ENMITY", Attribute::Enmity, SemanticCategory::Generic),
    token("PROTECTIVE_SHIELD", Attribute::ProtectiveShield, SemanticCategory::Generic),
    token("MP", Attribute::MinMp, SemanticCategory::Generic),
    token("SMITE_PERCENTAGE", Attribute::Smite, SemanticCategory::Percentage),
    token("IMPACT_TYPE_CHANCE_PERCENTAGE", Attribute::ImpactTypeChance, SemanticCategory::Percentage),
];

/// Older spellings still found in descriptions: (alias, canonical name).
/// Aliases match case-insensitively.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[("MIN_DMG", "DMG_MIN")];

/// Resolve a token name to its table row
pub fn lookup_token(name: &str) -> Option<&'static TokenSpec> {
    if let Some(spec) = TOKEN_TABLE.iter().find(|spec| spec.name == name) {
        return Some(spec);
    }
    LEGACY_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .and_then(|(_, canonical)| TOKEN_TABLE.iter().find(|spec| spec.name == *canonical))
}
