//! Monster - the closed set of things you can fight
//!
//! Monsters are plain data. How they react to a hit, and when they die, is
//! decided by the combat resolver, which matches on every variant.

use crate::health::HealthPoints;
use crate::types::MonsterKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wolf {
    pub name: String,
    pub health: HealthPoints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firelord {
    pub name: String,
    pub health: HealthPoints,
}

/// Has no health and cannot die
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ghost {}

/// A monster in an encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Monster {
    Wolf(Wolf),
    Firelord(Firelord),
    Ghost(Ghost),
}

impl Monster {
    /// Starting health is not validated; a wolf may start already dead
    pub fn wolf(name: impl Into<String>, health: impl Into<HealthPoints>) -> Self {
        Monster::Wolf(Wolf {
            name: name.into(),
            health: health.into(),
        })
    }

    pub fn firelord(name: impl Into<String>, health: impl Into<HealthPoints>) -> Self {
        Monster::Firelord(Firelord {
            name: name.into(),
            health: health.into(),
        })
    }

    pub fn ghost() -> Self {
        Monster::Ghost(Ghost {})
    }

    pub fn kind(&self) -> MonsterKind {
        match self {
            Monster::Wolf(_) => MonsterKind::Wolf,
            Monster::Firelord(_) => MonsterKind::Firelord,
            Monster::Ghost(_) => MonsterKind::Ghost,
        }
    }

    /// Ghosts are nameless
    pub fn name(&self) -> Option<&str> {
        match self {
            Monster::Wolf(wolf) => Some(&wolf.name),
            Monster::Firelord(firelord) => Some(&firelord.name),
            Monster::Ghost(_) => None,
        }
    }

    /// Current health, `None` for monsters without health
    pub fn health(&self) -> Option<HealthPoints> {
        match self {
            Monster::Wolf(wolf) => Some(wolf.health),
            Monster::Firelord(firelord) => Some(firelord.health),
            Monster::Ghost(_) => None,
        }
    }
}
