//! Skill description templating
//!
//! Descriptions are written by hand with `{{TOKEN}}` placeholders
//! ("Deals {{DMG_MIN}} to {{DMG_MAX}} damage"). Rendering strips the small
//! amount of markup the data carries, resolves each token against the
//! skill's attributes at the requested level and produces segments the UI
//! can style by category.

pub mod engine;
pub mod markup;
pub mod scanner;
pub mod segment;
pub mod tokens;

pub use engine::{render_segments, DescriptionEngine};
pub use markup::strip_markup;
pub use scanner::{scan, Piece};
pub use segment::{format_value, segments_to_text, RenderedSegment, SemanticCategory};
pub use tokens::{lookup_token, TokenSpec, LEGACY_ALIASES, TOKEN_TABLE};
