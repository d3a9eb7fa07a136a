//! Rendering configuration with documented defaults
//!
//! Every tunable of the stat and description pipeline lives here so that
//! the composing application decides them once, instead of each call site
//! picking its own marker text or cache size.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{CalcError, Result};

/// Upper bound for `max_fraction_digits`; beyond this f64 noise shows up in the text
pub const MAX_FRACTION_DIGITS_LIMIT: u8 = 6;

/// Text shown in place of a recognized token whose value is unavailable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableMarker {
    /// Renders as `N/A`
    #[default]
    NotApplicable,
    /// Renders as `???`
    Unknown,
}

impl UnavailableMarker {
    pub fn text(&self) -> &'static str {
        match self {
            UnavailableMarker::NotApplicable => "N/A",
            UnavailableMarker::Unknown => "???",
        }
    }
}

/// Configuration for stat computation and description rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Marker substituted for recognized tokens that resolve to no value
    ///
    /// One marker per engine: mixing `N/A` and `???` for the same
    /// condition confuses readers of the rendered text.
    pub unavailable_marker: UnavailableMarker,

    /// Maximum entries in the per-attribute stat cache (0 disables it)
    ///
    /// Each entry is one (skill, attribute, level) triple, so 1000 covers
    /// a full class skill list across the usual level range.
    pub stat_cache_capacity: usize,

    /// Maximum entries in the rendered description cache (0 disables it)
    pub description_cache_capacity: usize,

    /// Fraction digits kept when a computed value is shown as text
    ///
    /// Growth deltas in game data are often fractional (e.g. 0.35 per
    /// level); two digits keeps those readable without float noise.
    pub max_fraction_digits: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unavailable_marker: UnavailableMarker::NotApplicable,
            stat_cache_capacity: 1000,
            description_cache_capacity: 1000,
            max_fraction_digits: 2,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(CalcError::InvalidConfig(format!(
                "max_fraction_digits ({}) should be <= {}",
                self.max_fraction_digits, MAX_FRACTION_DIGITS_LIMIT
            )));
        }

        Ok(())
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }
}
