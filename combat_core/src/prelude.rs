//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Combat
pub use crate::combat::{
    apply_hit, fight, is_dead, resolve_hit, run_fight, run_fight_with, FightResult, HitOutcome,
    HitResult,
};

// Config
pub use crate::config::{ConfigError, FightConstants};

// Re-exports from bestiary_core
pub use bestiary_core::{HealthPoints, Monster, MonsterKind, Weapon};
