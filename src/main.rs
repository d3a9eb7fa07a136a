//! Skillcalc - Entry Point
//!
//! Renders skill descriptions from a game-data file at a chosen level,
//! either as plain text lines or as JSON segments for a UI to consume.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use skillcalc::core::error::{CalcError, Result};
use skillcalc::core::types::{Level, SkillId};
use skillcalc::core::RenderConfig;
use skillcalc::description::{DescriptionEngine, RenderedSegment};
use skillcalc::skills::{Skill, SkillCatalog};

/// Render level-scaled skill descriptions
#[derive(Parser, Debug)]
#[command(name = "skillcalc")]
#[command(about = "Render skill descriptions with stats computed for a given level")]
struct Args {
    /// Skill data file (.json or .toml)
    #[arg(long)]
    skills: PathBuf,

    /// Render only this skill id (default: every skill)
    #[arg(long)]
    skill: Option<String>,

    /// Skill level to compute values for
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    level: Level,

    /// Template to render instead of each skill's own description
    #[arg(long)]
    template: Option<String>,

    /// Render config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct RenderedSkill<'a> {
    id: &'a SkillId,
    name: &'a str,
    level: Level,
    text: String,
    segments: Vec<RenderedSegment>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillcalc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let catalog = SkillCatalog::load(&args.skills)?;
    tracing::info!("Loaded {} skills from {}", catalog.len(), args.skills.display());

    let selected: Vec<&Skill> = match &args.skill {
        Some(id) => {
            let id = SkillId::from(id.as_str());
            let skill = catalog.get(&id).ok_or(CalcError::SkillNotFound(id))?;
            vec![skill]
        }
        None => catalog.iter().collect(),
    };

    let engine = DescriptionEngine::new(config);
    let rendered: Vec<RenderedSkill> = selected
        .into_iter()
        .map(|skill| {
            let template = args.template.as_deref().unwrap_or(&skill.description);
            let segments = engine.render(template, skill, args.level);
            RenderedSkill {
                id: &skill.id,
                name: &skill.name,
                level: args.level,
                text: engine.to_text(&segments),
                segments,
            }
        })
        .collect();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&rendered)?),
        "text" => {
            for skill in &rendered {
                println!("{} (Lv. {}): {}", skill.name, skill.level, skill.text);
            }
        }
        other => return Err(CalcError::UnsupportedFormat(other.to_string())),
    }

    Ok(())
}
