//! Fight loop - strike a monster until it dies or the player gives up

use super::resolution::{is_dead, resolve_hit};
use super::result::FightResult;
use crate::config::{FightConstants, DEFAULT_MAX_ATTEMPTS};
use bestiary_core::{HealthPoints, Monster, Weapon};
use tracing::debug;

/// Fight a monster with the default damage and attempt budget
pub fn fight(monster: &Monster, weapon: Weapon) -> FightResult {
    run_fight_with(monster, weapon, &FightConstants::default())
}

/// Fight a monster using loaded fight constants
pub fn run_fight_with(
    monster: &Monster,
    weapon: Weapon,
    constants: &FightConstants,
) -> FightResult {
    run_fight(monster, weapon, constants.damage_per_hit, constants.max_attempts)
}

/// Strike `monster` with `weapon` for `damage_per_hit` on every attempt
///
/// Stops on the attempt that kills the monster and reports that attempt.
/// If the monster is still alive after `max_attempts` strikes, reports
/// `max_attempts`. A budget of zero performs no strikes. Hits are recorded as
/// they land, so memory follows the strikes made rather than the budget.
pub fn run_fight(
    monster: &Monster,
    weapon: Weapon,
    damage_per_hit: HealthPoints,
    max_attempts: u32,
) -> FightResult {
    let mut current = monster.clone();
    let mut hits = Vec::with_capacity(max_attempts.min(DEFAULT_MAX_ATTEMPTS) as usize);

    for attempt in 1..=max_attempts {
        let (next, hit) = resolve_hit(&current, weapon, damage_per_hit);
        current = next;
        hits.push(hit);

        if is_dead(&current) {
            debug!(kind = %current.kind(), %weapon, attempt, "monster slain");
            return FightResult {
                monster: current,
                attempts: attempt,
                killed: true,
                hits,
            };
        }
    }

    debug!(kind = %current.kind(), %weapon, max_attempts, "monster survived");
    FightResult {
        monster: current,
        attempts: max_attempts,
        killed: false,
        hits,
    }
}
