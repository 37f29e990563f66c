//! Combat - hit resolution, death checks and the fight loop

mod fight;
mod resolution;
mod result;

pub use fight::{fight, run_fight, run_fight_with};
pub use resolution::{apply_hit, is_dead, resolve_hit};
pub use result::{FightResult, HitOutcome, HitResult};
