//! Fight configuration loaded from TOML

mod constants;

pub use constants::{FightConstants, DEFAULT_DAMAGE_PER_HIT, DEFAULT_MAX_ATTEMPTS};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading fight configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}
