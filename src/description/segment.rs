//! Rendered description segments

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::MAX_FRACTION_DIGITS_LIMIT;

/// Presentation hint for a computed value (the UI maps these to colors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticCategory {
    Damage,
    Heal,
    Duration,
    Percentage,
    Generic,
}

impl SemanticCategory {
    pub fn name(&self) -> &'static str {
        match self {
            SemanticCategory::Damage => "damage",
            SemanticCategory::Heal => "heal",
            SemanticCategory::Duration => "duration",
            SemanticCategory::Percentage => "percentage",
            SemanticCategory::Generic => "generic",
        }
    }
}

/// One run of rendered output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedSegment {
    /// Literal text, unresolved tokens and unavailable markers
    Text { text: String },
    /// A value computed from the skill's attributes
    Value { value: f64, category: SemanticCategory },
}

impl RenderedSegment {
    pub fn text(text: impl Into<String>) -> Self {
        RenderedSegment::Text { text: text.into() }
    }

    pub fn value(value: f64, category: SemanticCategory) -> Self {
        RenderedSegment::Value { value, category }
    }

    /// Segment as display text, values rounded to `max_fraction_digits`
    pub fn to_text(&self, max_fraction_digits: u8) -> String {
        match self {
            RenderedSegment::Text { text } => text.clone(),
            RenderedSegment::Value { value, .. } => format_value(*value, max_fraction_digits),
        }
    }

    pub fn as_value(&self) -> Option<f64> {
        match self {
            RenderedSegment::Value { value, .. } => Some(*value),
            RenderedSegment::Text { .. } => None,
        }
    }
}

impl fmt::Display for RenderedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedSegment::Text { text } => f.write_str(text),
            RenderedSegment::Value { value, .. } => f.write_str(&format_value(*value, 2)),
        }
    }
}

/// Format a number for display
///
/// Rounds to at most `max_fraction_digits` (capped at 6), drops trailing
/// zeros and the decimal point for integral values, and never prints `-0`.
pub fn format_value(value: f64, max_fraction_digits: u8) -> String {
    let digits = usize::from(max_fraction_digits.min(MAX_FRACTION_DIGITS_LIMIT));
    let mut text = format!("{:.*}", digits, value);
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Concatenate segments into plain text
pub fn segments_to_text(segments: &[RenderedSegment], max_fraction_digits: u8) -> String {
    segments
        .iter()
        .map(|segment| segment.to_text(max_fraction_digits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integral() {
        assert_eq!(format_value(120.0, 2), "120");
        assert_eq!(format_value(0.0, 2), "0");
        assert_eq!(format_value(-15.0, 2), "-15");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_value(12.5, 2), "12.5");
        assert_eq!(format_value(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_value(2.675, 0), "3");
        assert_eq!(format_value(0.1 + 0.2, 2), "0.3");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_value(-0.0, 2), "0");
        assert_eq!(format_value(-0.001, 2), "0");
    }

    #[test]
    fn test_format_digit_cap() {
        assert_eq!(format_value(1.123456789, 200), "1.123457");
    }

    #[test]
    fn test_segments_to_text() {
        let segments = vec![
            RenderedSegment::text("Heals "),
            RenderedSegment::value(250.0, SemanticCategory::Heal),
            RenderedSegment::text(" HP"),
        ];
        assert_eq!(segments_to_text(&segments, 2), "Heals 250 HP");
        assert_eq!(segments[1].to_string(), "250");
        assert_eq!(segments[1].as_value(), Some(250.0));
        assert_eq!(segments[0].as_value(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(RenderedSegment::value(5.0, SemanticCategory::Duration)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "value", "value": 5.0, "category": "duration"}));

        let json = serde_json::to_value(RenderedSegment::text("x")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "text", "text": "x"}));
    }
}
