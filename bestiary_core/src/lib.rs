//! bestiary_core - The closed set of monster kinds and the weapons used on them
//!
//! Monsters are plain data records. Every behavior (hit resolution, death
//! checks, fighting) lives in `combat_core`, which matches exhaustively on
//! [`Monster`] so a new kind cannot be added without handling it everywhere.

pub mod health;
pub mod monster;
pub mod types;

pub use health::HealthPoints;
pub use monster::{Firelord, Ghost, Monster, Wolf};
pub use types::{MonsterKind, Weapon};
