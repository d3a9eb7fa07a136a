//! Render description templates against a skill at a level
//!
//! Rendering never fails. Unknown tokens pass through verbatim so missing
//! mappings stay visible, and recognized tokens with no value become the
//! configured unavailable marker.

use rayon::prelude::*;

use crate::core::cache::BoundedCache;
use crate::core::config::{RenderConfig, UnavailableMarker};
use crate::core::types::{Level, SkillId};
use crate::description::markup::strip_markup;
use crate::description::scanner::{scan, Piece};
use crate::description::segment::{segments_to_text, RenderedSegment};
use crate::description::tokens::lookup_token;
use crate::skills::{Attribute, Skill};
use crate::stats::{compute_value, StatInterpolator, StatValue};

/// Collects segments, merging adjacent text runs
#[derive(Debug, Default)]
struct SegmentBuilder {
    segments: Vec<RenderedSegment>,
}

impl SegmentBuilder {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(RenderedSegment::Text { text: last }) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(RenderedSegment::text(text));
        }
    }

    fn push_segment(&mut self, segment: RenderedSegment) {
        self.segments.push(segment);
    }

    fn finish(self) -> Vec<RenderedSegment> {
        self.segments
    }
}

/// Shared rendering path; `resolve` supplies attribute values
fn render_with(
    template: &str,
    marker: UnavailableMarker,
    resolve: impl Fn(Attribute) -> StatValue,
) -> Vec<RenderedSegment> {
    let cleaned = strip_markup(template);
    let mut builder = SegmentBuilder::default();

    for piece in scan(&cleaned) {
        match piece {
            Piece::Literal(text) => builder.push_text(text),
            Piece::Placeholder { name, raw } => match lookup_token(name) {
                Some(spec) => match resolve(spec.attribute) {
                    StatValue::Value(value) => {
                        builder.push_segment(RenderedSegment::value(value, spec.category))
                    }
                    StatValue::Unavailable => builder.push_text(marker.text()),
                },
                None => {
                    tracing::trace!(token = name, "unresolved description token");
                    builder.push_text(raw);
                }
            },
        }
    }

    builder.finish()
}

/// Render `template` for `skill` at `level` without any caching
///
/// A template that is empty once markup is stripped (`""`, `"<span></span>"`)
/// renders to an empty sequence rather than a single empty text segment.
pub fn render_segments(
    template: &str,
    skill: &Skill,
    level: Level,
    marker: UnavailableMarker,
) -> Vec<RenderedSegment> {
    render_with(template, marker, |attribute| match skill.rule(attribute) {
        Some(rule) => compute_value(&rule, level),
        None => StatValue::Unavailable,
    })
}

/// Description renderer owning its stat and output caches
///
/// Safe to share across threads; both caches are internally locked.
/// Renders are keyed by template, skill id, [`Skill::fingerprint`] and
/// level, so rebuilding a skill under the same id never serves stale output.
#[derive(Debug)]
pub struct DescriptionEngine {
    config: RenderConfig,
    stats: StatInterpolator,
    cache: BoundedCache<RenderKey, Vec<RenderedSegment>>,
}

type RenderKey = (String, SkillId, u64, Level);

impl DescriptionEngine {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            stats: StatInterpolator::new(config.stat_cache_capacity),
            cache: BoundedCache::new(config.description_cache_capacity),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `template` for `skill` at `level`
    ///
    /// Same output as [`render_segments`], including the empty sequence for
    /// a template with nothing left after markup stripping.
    pub fn render(&self, template: &str, skill: &Skill, level: Level) -> Vec<RenderedSegment> {
        let key = (template.to_string(), skill.id.clone(), skill.fingerprint(), level);
        self.cache.get_or_insert_with(key, || {
            render_with(template, self.config.unavailable_marker, |attribute| {
                self.stats.value_for(skill, attribute, level)
            })
        })
    }

    /// Render and flatten to display text
    pub fn render_text(&self, template: &str, skill: &Skill, level: Level) -> String {
        let segments = self.render(template, skill, level);
        self.to_text(&segments)
    }

    /// Render the skill's own description
    pub fn describe(&self, skill: &Skill, level: Level) -> Vec<RenderedSegment> {
        self.render(&skill.description, skill, level)
    }

    /// Render every skill's description at `level`, in input order
    pub fn render_batch(&self, skills: &[Skill], level: Level) -> Vec<Vec<RenderedSegment>> {
        skills
            .par_iter()
            .map(|skill| self.describe(skill, level))
            .collect()
    }

    /// Flatten segments using this engine's number formatting
    pub fn to_text(&self, segments: &[RenderedSegment]) -> String {
        segments_to_text(segments, self.config.max_fraction_digits)
    }

    /// Forget all memoized stats and renders
    pub fn clear_caches(&self) {
        self.stats.clear();
        self.cache.clear();
    }
}

impl Default for DescriptionEngine {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
