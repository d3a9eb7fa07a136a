//! Level-indexed stat computation
//!
//! A skill attribute grows with level according to a [`LevelGrowthRule`]:
//! a flat per-level delta, an array of incremental deltas, or an explicit
//! per-level lookup table.

pub mod growth;
pub mod interpolator;
pub mod table;

pub use growth::{LevelGrowthRule, StatValue};
pub use interpolator::{compute_value, StatInterpolator};
pub use table::{is_sentinel, LevelTable, TableValue};
