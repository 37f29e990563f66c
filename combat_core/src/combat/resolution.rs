//! Hit resolution - apply a weapon strike to a monster
//!
//! Every monster kind reacts to every weapon through an explicit match arm.
//! There are no wildcard arms, so adding a kind or a weapon fails to compile
//! until its reaction is written here.
//!
//! | Kind     | Stick        | Arrow       | Fireball    |
//! |----------|--------------|-------------|-------------|
//! | Wolf     | full damage  | full damage | full damage |
//! | Firelord | half damage  | full damage | immune      |
//! | Ghost    | immortal     | immortal    | immortal    |

use super::result::{HitOutcome, HitResult};
use bestiary_core::{Firelord, Ghost, HealthPoints, Monster, Weapon, Wolf};
use tracing::{debug, trace};

/// Resolve a hit against a monster (immutable API)
///
/// Returns the new monster state and the hit result. The input monster is
/// left untouched, so the same call always yields the same answer.
pub fn resolve_hit(
    monster: &Monster,
    weapon: Weapon,
    damage: HealthPoints,
) -> (Monster, HitResult) {
    let mut new_monster = monster.clone();
    let result = apply_hit(&mut new_monster, weapon, damage);
    (new_monster, result)
}

/// Resolve a hit against a monster in place
pub fn apply_hit(monster: &mut Monster, weapon: Weapon, damage: HealthPoints) -> HitResult {
    let kind = monster.kind();
    let was_dead = is_dead(monster);
    let health_before = monster.health();

    let reaction = match monster {
        Monster::Wolf(wolf) => hit_wolf(wolf, weapon, damage),
        Monster::Firelord(firelord) => hit_firelord(firelord, weapon, damage),
        Monster::Ghost(ghost) => hit_ghost(ghost, weapon, damage),
    };

    let health_after = monster.health();
    let is_killing_blow = !was_dead && is_dead(monster);

    trace!(
        %kind,
        %weapon,
        damage = damage.value(),
        taken = reaction.taken.value(),
        health = ?health_after.map(HealthPoints::value),
        "hit resolved"
    );
    if is_killing_blow {
        debug!(%kind, name = ?monster.name(), "killing blow");
    }

    HitResult {
        kind,
        weapon,
        raw_damage: damage,
        damage_taken: reaction.taken,
        health_before,
        health_after,
        outcome: reaction.outcome,
        is_killing_blow,
        narration: reaction.narration,
    }
}

/// Whether a monster is dead
///
/// Mortal monsters die when their health reaches zero. Ghosts never die.
pub fn is_dead(monster: &Monster) -> bool {
    match monster {
        Monster::Wolf(wolf) => !wolf.health.is_positive(),
        Monster::Firelord(firelord) => !firelord.health.is_positive(),
        Monster::Ghost(_) => false,
    }
}

/// Per-kind reaction to a single strike
struct Reaction {
    taken: HealthPoints,
    outcome: HitOutcome,
    narration: String,
}

/// Wolves take full damage from anything
fn hit_wolf(wolf: &mut Wolf, weapon: Weapon, damage: HealthPoints) -> Reaction {
    match weapon {
        Weapon::Stick | Weapon::Arrow | Weapon::Fireball => {
            wolf.health = (wolf.health - damage).clamp_to_floor();
            Reaction {
                taken: damage,
                outcome: HitOutcome::Damaged,
                narration: format!(
                    "{} the wolf growls as it takes {} damage from the hit.",
                    wolf.name, damage
                ),
            }
        }
    }
}

fn hit_firelord(firelord: &mut Firelord, weapon: Weapon, damage: HealthPoints) -> Reaction {
    match weapon {
        Weapon::Stick => {
            let taken = damage / 2;
            firelord.health = (firelord.health - taken).clamp_to_floor();
            Reaction {
                taken,
                outcome: HitOutcome::Resisted,
                narration: format!(
                    "{} the Firelord resists {} and only takes {} damage.",
                    firelord.name, weapon, taken
                ),
            }
        }
        Weapon::Fireball => Reaction {
            taken: HealthPoints::ZERO,
            outcome: HitOutcome::Immune,
            narration: format!(
                "{} the Firelord is immune to fireballs. He laughs at you.",
                firelord.name
            ),
        },
        Weapon::Arrow => {
            firelord.health = (firelord.health - damage).clamp_to_floor();
            Reaction {
                taken: damage,
                outcome: HitOutcome::Damaged,
                narration: format!(
                    "{} the Firelord roars as it takes {} damage from the hit.",
                    firelord.name, damage
                ),
            }
        }
    }
}

fn hit_ghost(_ghost: &mut Ghost, _weapon: Weapon, _damage: HealthPoints) -> Reaction {
    Reaction {
        taken: HealthPoints::ZERO,
        outcome: HitOutcome::Immortal,
        narration: "Ghosts are immortal. You are doomed.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_core::MonsterKind;
    use proptest::prelude::*;

    fn hp(value: i32) -> HealthPoints {
        HealthPoints(value)
    }

    #[test]
    fn test_wolf_takes_full_damage() {
        let wolf = Monster::wolf("Wilhelm", 100);

        for &weapon in Weapon::all() {
            let (new_wolf, result) = resolve_hit(&wolf, weapon, hp(40));
            assert_eq!(new_wolf.health(), Some(hp(60)));
            assert_eq!(result.damage_taken, hp(40));
            assert_eq!(result.outcome, HitOutcome::Damaged);
        }
    }

    #[test]
    fn test_wolf_narration() {
        let (_, result) = resolve_hit(&Monster::wolf("Wilhelm", 100), Weapon::Arrow, hp(40));
        assert_eq!(
            result.narration,
            "Wilhelm the wolf growls as it takes 40 damage from the hit."
        );
    }

    #[test]
    fn test_wolf_health_clamped_at_zero() {
        let (new_wolf, result) = resolve_hit(&Monster::wolf("Wilhelm", 20), Weapon::Stick, hp(40));
        assert_eq!(new_wolf.health(), Some(HealthPoints::ZERO));
        assert!(is_dead(&new_wolf));
        assert!(result.is_killing_blow);
    }

    #[test]
    fn test_firelord_resists_stick() {
        let gerhard = Monster::firelord("Gerhard", 100);
        let (new_gerhard, result) = resolve_hit(&gerhard, Weapon::Stick, hp(45));

        assert_eq!(new_gerhard.health(), Some(hp(78)));
        assert_eq!(result.damage_taken, hp(22));
        assert_eq!(result.outcome, HitOutcome::Resisted);
        assert_eq!(
            result.narration,
            "Gerhard the Firelord resists wooden stick and only takes 22 damage."
        );
    }

    #[test]
    fn test_firelord_immune_to_fireball() {
        let gerhard = Monster::firelord("Gerhard", 100);
        let (new_gerhard, result) = resolve_hit(&gerhard, Weapon::Fireball, hp(40));

        assert_eq!(new_gerhard, gerhard);
        assert_eq!(result.damage_taken, HealthPoints::ZERO);
        assert_eq!(result.outcome, HitOutcome::Immune);
        assert!(result.narration.starts_with("Gerhard the Firelord is immune"));
    }

    #[test]
    fn test_firelord_takes_full_arrow_damage() {
        let (new_gerhard, result) =
            resolve_hit(&Monster::firelord("Gerhard", 100), Weapon::Arrow, hp(40));
        assert_eq!(new_gerhard.health(), Some(hp(60)));
        assert_eq!(result.outcome, HitOutcome::Damaged);
        assert!(result.narration.contains("roars"));
    }

    #[test]
    fn test_ghost_is_immortal() {
        let astrid = Monster::ghost();
        for &weapon in Weapon::all() {
            let (new_astrid, result) = resolve_hit(&astrid, weapon, hp(1000));
            assert_eq!(new_astrid, astrid);
            assert!(!is_dead(&new_astrid));
            assert_eq!(result.kind, MonsterKind::Ghost);
            assert_eq!(result.health_before, None);
            assert_eq!(result.health_after, None);
            assert_eq!(result.outcome, HitOutcome::Immortal);
            assert_eq!(result.narration, "Ghosts are immortal. You are doomed.");
        }
    }

    #[test]
    fn test_death_predicate() {
        assert!(!is_dead(&Monster::wolf("a", 1)));
        assert!(is_dead(&Monster::wolf("a", 0)));
        assert!(is_dead(&Monster::firelord("b", -4)));
        assert!(!is_dead(&Monster::ghost()));
    }

    #[test]
    fn test_hitting_dead_monster_is_not_killing_blow() {
        let corpse = Monster::wolf("Wilhelm", 0);
        let (still_dead, result) = resolve_hit(&corpse, Weapon::Arrow, hp(40));
        assert!(is_dead(&still_dead));
        assert!(!result.is_killing_blow);
        assert_eq!(still_dead.health(), Some(HealthPoints::ZERO));
    }

    #[test]
    fn test_resolve_leaves_input_untouched() {
        let wolf = Monster::wolf("Wilhelm", 100);
        let _ = resolve_hit(&wolf, Weapon::Stick, hp(40));
        assert_eq!(wolf.health(), Some(hp(100)));
    }

    fn arb_weapon() -> impl Strategy<Value = Weapon> {
        prop_oneof![Just(Weapon::Stick), Just(Weapon::Arrow), Just(Weapon::Fireball)]
    }

    fn arb_monster() -> impl Strategy<Value = Monster> {
        prop_oneof![
            (0i32..500).prop_map(|h| Monster::wolf("Wolf", h)),
            (0i32..500).prop_map(|h| Monster::firelord("Firelord", h)),
            Just(Monster::ghost()),
        ]
    }

    proptest! {
        #[test]
        fn prop_health_never_negative(
            monster in arb_monster(),
            weapon in arb_weapon(),
            damage in 1i32..1000,
        ) {
            let (new_monster, _) = resolve_hit(&monster, weapon, hp(damage));
            if let Some(health) = new_monster.health() {
                prop_assert!(health >= HealthPoints::ZERO);
            }
        }

        #[test]
        fn prop_death_is_idempotent(
            monster in arb_monster(),
            weapons in proptest::collection::vec(arb_weapon(), 1..20),
            damage in 1i32..200,
        ) {
            let mut current = monster;
            let mut seen_dead = false;
            for weapon in weapons {
                let (next, _) = resolve_hit(&current, weapon, hp(damage));
                if seen_dead {
                    prop_assert!(is_dead(&next));
                    prop_assert!(next.health().map_or(true, |h| h == HealthPoints::ZERO));
                }
                seen_dead = is_dead(&next);
                current = next;
            }
        }

        #[test]
        fn prop_firelord_damage_by_weapon(
            health in 1i32..10_000,
            damage in 1i32..1000,
            weapon in arb_weapon(),
        ) {
            let (_, result) = resolve_hit(&Monster::firelord("F", health), weapon, hp(damage));
            let expected = match weapon {
                Weapon::Stick => damage / 2,
                Weapon::Fireball => 0,
                Weapon::Arrow => damage,
            };
            prop_assert_eq!(result.damage_taken, hp(expected));
            prop_assert_eq!(result.health_after, Some(hp((health - expected).max(0))));
        }

        #[test]
        fn prop_ghost_invariant(
            weapons in proptest::collection::vec(arb_weapon(), 0..30),
            damage in any::<i32>(),
        ) {
            let mut ghost = Monster::ghost();
            for weapon in weapons {
                let _ = apply_hit(&mut ghost, weapon, hp(damage));
                prop_assert_eq!(&ghost, &Monster::ghost());
                prop_assert!(!is_dead(&ghost));
            }
        }

        #[test]
        fn prop_apply_and_resolve_agree(
            monster in arb_monster(),
            weapon in arb_weapon(),
            damage in 1i32..1000,
        ) {
            let (resolved, resolved_result) = resolve_hit(&monster, weapon, hp(damage));
            let mut applied = monster.clone();
            let applied_result = apply_hit(&mut applied, weapon, hp(damage));
            prop_assert_eq!(resolved, applied);
            prop_assert_eq!(resolved_result, applied_result);
        }
    }
}
