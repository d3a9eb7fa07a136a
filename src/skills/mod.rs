//! Skill records as supplied by game data
//!
//! A skill exposes a set of numeric attributes (damage, healing, duration,
//! resistances...). Each attribute carries its own growth data so the stat
//! layer can compute its magnitude at any level.

pub mod attribute;
pub mod catalog;
pub mod skill;

pub use attribute::{Attribute, AttributeGrowth};
pub use catalog::SkillCatalog;
pub use skill::Skill;
