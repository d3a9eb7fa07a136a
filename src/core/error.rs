use thiserror::Error;

use crate::core::types::SkillId;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid skill {id}: {reason}")]
    InvalidSkill { id: SkillId, reason: String },

    #[error("Duplicate skill id: {0}")]
    DuplicateSkill(SkillId),

    #[error("Unsupported data format: {0}")]
    UnsupportedFormat(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(SkillId),
}

pub type Result<T> = std::result::Result<T, CalcError>;
