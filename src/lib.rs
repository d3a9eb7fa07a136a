//! Skillcalc - level-scaled skill stats and description rendering
//!
//! Computes a skill attribute's magnitude at any level from its growth data
//! and renders `{{TOKEN}}` description templates with those values filled in.

pub mod core;
pub mod description;
pub mod skills;
pub mod stats;

pub use crate::core::{CalcError, RenderConfig, Result, SkillId, UnavailableMarker};
pub use crate::description::{render_segments, DescriptionEngine, RenderedSegment, SemanticCategory};
pub use crate::skills::{Attribute, AttributeGrowth, Skill, SkillCatalog};
pub use crate::stats::{
    compute_value, LevelGrowthRule, LevelTable, StatInterpolator, StatValue, TableValue,
};
