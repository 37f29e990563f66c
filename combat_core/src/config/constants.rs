//! Fight constants - strike damage and attempt budget

use bestiary_core::HealthPoints;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Attempts allowed before the player gives up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Raw damage of every strike in a fight
pub const DEFAULT_DAMAGE_PER_HIT: HealthPoints = HealthPoints(40);

/// Tunable fight parameters
///
/// There is no global instance; callers load or build one and pass it to
/// [`crate::combat::run_fight_with`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightConstants {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_damage_per_hit")]
    pub damage_per_hit: HealthPoints,
}

impl Default for FightConstants {
    fn default() -> Self {
        FightConstants {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            damage_per_hit: DEFAULT_DAMAGE_PER_HIT,
        }
    }
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_damage_per_hit() -> HealthPoints {
    DEFAULT_DAMAGE_PER_HIT
}

impl FightConstants {
    /// Load and validate constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let constants: FightConstants = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        constants.validate()?;
        Ok(constants)
    }

    /// Parse and validate constants from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let constants: FightConstants =
            toml::from_str(content).map_err(|e| ConfigError::Parse { error: e, path: None })?;
        constants.validate()?;
        Ok(constants)
    }

    /// A fight needs at least one strike, and strikes must hurt
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if !self.damage_per_hit.is_positive() {
            return Err(ConfigError::Validation(format!(
                "damage_per_hit must be positive, got {}",
                self.damage_per_hit
            )));
        }
        Ok(())
    }
}
