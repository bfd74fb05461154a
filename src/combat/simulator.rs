//! The stochastic encounter simulator.
//!
//! One call runs a full fight: a sequence of enemies (count fixed by the
//! difficulty), each preceded by a hidden pre-attack chance and a dodge
//! roll, then resolved in a turn-based melee loop.
//!
//! ## Draw order
//!
//! Per enemy the simulator consumes exactly one boolean draw (hidden
//! pre-attack) followed by one integer draw in `[0, 9)` (dodge); the melee
//! loop consumes nothing. Reordering these draws changes every seeded
//! result, so the order is part of the contract.

use crate::combat::Difficulty;
use crate::core::StudyRng;
use crate::enemies::Enemy;

/// Dodge roll value that cancels enemy counter-damage for one fight.
const DODGE_SENTINEL: u32 = 0;

/// Outcome of one simulated fight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FightOutcome {
    /// Whether the player outlived every enemy.
    pub survived: bool,
    /// Health left after the fight; 0 when not survived.
    pub remaining_health: f64,
}

impl FightOutcome {
    /// The defeated outcome.
    #[must_use]
    pub fn defeated() -> Self {
        Self {
            survived: false,
            remaining_health: 0.0,
        }
    }

    /// A survived outcome with the given health left.
    #[must_use]
    pub fn survived(remaining_health: f64) -> Self {
        Self {
            survived: true,
            remaining_health,
        }
    }
}

/// Simulate one fight against `difficulty.enemy_count()` enemies in sequence.
///
/// `player_damage <= 0` is an automatic loss: enemy health could never be
/// depleted, so the melee loop would not terminate. The build generator
/// keeps such builds out of the search, but the simulator guards anyway.
///
/// Dodge cancels the enemy's counter-damage for that single enemy's fight;
/// it never cancels the player's own attack. When the killing blow lands,
/// an un-dodged enemy still strikes back on that same tick.
pub fn simulate(
    rng: &mut StudyRng,
    player_health: f64,
    player_damage: f64,
    enemy: &Enemy,
    difficulty: Difficulty,
) -> FightOutcome {
    if player_damage <= 0.0 {
        return FightOutcome::defeated();
    }

    let mut health = player_health;

    for _ in 0..difficulty.enemy_count() {
        // Hidden pre-attack before the encounter
        if rng.gen_bool() {
            health -= enemy.base_damage;
            if health <= 0.0 {
                return FightOutcome::defeated();
            }
        }

        let dodged = rng.gen_range_u32(0..9) == DODGE_SENTINEL;

        let mut enemy_health = enemy.base_health;
        while enemy_health > 0.0 && health > 0.0 {
            enemy_health -= player_damage;
            if !dodged {
                health -= enemy.base_damage;
            }
            if health <= 0.0 {
                return FightOutcome::defeated();
            }
        }
    }

    FightOutcome::survived(health)
}
