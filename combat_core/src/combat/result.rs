//! Hit and fight results

use bestiary_core::{HealthPoints, Monster, MonsterKind, Weapon};
use serde::{Deserialize, Serialize};

/// How a monster reacted to a single hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitOutcome {
    /// Took the full damage
    Damaged,
    /// Took a reduced share of the damage
    Resisted,
    /// Took no damage from this weapon
    Immune,
    /// Cannot be harmed at all
    Immortal,
}

/// Result of resolving one hit against a monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    pub kind: MonsterKind,
    pub weapon: Weapon,
    /// Damage carried by the strike before the monster's reaction
    pub raw_damage: HealthPoints,
    /// Damage the monster actually took
    pub damage_taken: HealthPoints,
    /// `None` for monsters without health
    pub health_before: Option<HealthPoints>,
    pub health_after: Option<HealthPoints>,
    pub outcome: HitOutcome,
    /// The monster was alive before this hit and dead after it
    pub is_killing_blow: bool,
    pub narration: String,
}

/// Result of a whole fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightResult {
    /// The monster's state when the fight stopped
    pub monster: Monster,
    /// Attempt on which the monster died, or the attempt budget if it survived
    pub attempts: u32,
    pub killed: bool,
    /// Every hit in order, one per attempt
    pub hits: Vec<HitResult>,
}

impl FightResult {
    /// Narration lines in the order they happened
    pub fn narration(&self) -> impl Iterator<Item = &str> {
        self.hits.iter().map(|h| h.narration.as_str())
    }

    /// Total damage the monster took over the fight
    pub fn total_damage_taken(&self) -> HealthPoints {
        self.hits
            .iter()
            .fold(HealthPoints::ZERO, |acc, h| acc + h.damage_taken)
    }
}
