use serde::{Deserialize, Serialize};
use std::fmt;

/// Weapons a monster can be struck with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    Stick,
    Arrow,
    Fireball,
}

impl Weapon {
    /// Get all weapon variants
    pub fn all() -> &'static [Weapon] {
        &[Weapon::Stick, Weapon::Arrow, Weapon::Fireball]
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weapon::Stick => write!(f, "wooden stick"),
            Weapon::Arrow => write!(f, "arrow"),
            Weapon::Fireball => write!(f, "fireball"),
        }
    }
}

/// Discriminant of [`crate::Monster`] without its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    Wolf,
    Firelord,
    Ghost,
}

impl MonsterKind {
    /// Get all monster kinds
    pub fn all() -> &'static [MonsterKind] {
        &[MonsterKind::Wolf, MonsterKind::Firelord, MonsterKind::Ghost]
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonsterKind::Wolf => write!(f, "Wolf"),
            MonsterKind::Firelord => write!(f, "Firelord"),
            MonsterKind::Ghost => write!(f, "Ghost"),
        }
    }
}
