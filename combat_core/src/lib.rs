//! combat_core - Fighting the monsters of `bestiary_core`
//!
//! This library provides:
//! - Hit resolution: how each monster kind reacts to each weapon
//! - Death checks: when a monster counts as dead
//! - The fight loop: repeated strikes until death or the attempt budget runs out
//! - FightConstants: damage and attempt budget, optionally loaded from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use combat_core::prelude::*;
//!
//! let wilhelm = Monster::wolf("Wilhelm", 100);
//! let (wilhelm, hit) = resolve_hit(&wilhelm, Weapon::Arrow, HealthPoints(40));
//! println!("{}", hit.narration);
//!
//! let result = fight(&wilhelm, Weapon::Stick);
//! assert_eq!(result.attempts, 2);
//! assert!(is_dead(&result.monster));
//! ```

pub mod combat;
pub mod config;
pub mod prelude;

pub use combat::{
    apply_hit, fight, is_dead, resolve_hit, run_fight, run_fight_with, FightResult, HitOutcome,
    HitResult,
};
pub use config::{ConfigError, FightConstants};

// Re-export the monster model
pub use bestiary_core::{HealthPoints, Monster, MonsterKind, Weapon};
