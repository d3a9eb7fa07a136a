pub mod cache;
pub mod config;
pub mod error;
pub mod types;

pub use cache::{fingerprint_hasher, BoundedCache};
pub use config::{RenderConfig, UnavailableMarker};
pub use error::{CalcError, Result};
pub use types::{Level, SkillId};
