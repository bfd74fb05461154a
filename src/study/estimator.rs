//! Survival rate estimation for a fixed build.

use crate::builds::Build;
use crate::combat::{simulate, Difficulty};
use crate::core::StudyRng;
use crate::enemies::Enemy;

/// Estimate the survival probability of `build` against `enemy` at
/// `difficulty` over `trials` independent fights.
///
/// Effective stats are derived once from the build and the ability toggle,
/// then every trial draws from the same stream in sequence. The result is
/// an exact multiple of `1 / trials`.
///
/// Panics if `trials` is zero; [`crate::core::StudyConfig::validate`]
/// rejects that before a study starts.
pub fn survival_rate(
    rng: &mut StudyRng,
    build: &Build,
    enemy: &Enemy,
    difficulty: Difficulty,
    trials: u32,
    abilities_enabled: bool,
) -> f64 {
    assert!(trials >= 1, "trials must be at least 1");

    let health = build.effective_health(abilities_enabled);
    let damage = build.effective_damage(abilities_enabled);

    let mut survived = 0u32;
    for _ in 0..trials {
        if simulate(rng, health, damage, enemy, difficulty).survived {
            survived += 1;
        }
    }

    f64::from(survived) / f64::from(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyVariant;

    fn contested_build() -> Build {
        Build {
            health: 9,
            damage: 7,
            damage_dealer: false,
            evolution: false,
        }
    }

    fn custom_enemy(base_health: f64, base_damage: f64) -> Enemy {
        Enemy {
            variant: EnemyVariant::Zombie,
            base_health,
            base_damage,
        }
    }

    #[test]
    fn test_rate_is_multiple_of_one_over_trials() {
        let enemy = custom_enemy(10.0, 2.0);
        let mut rng = StudyRng::new(42);

        for trials in [1, 7, 200] {
            let rate = survival_rate(
                &mut rng,
                &contested_build(),
                &enemy,
                Difficulty::Easy,
                trials,
                false,
            );
            let scaled = rate * f64::from(trials);
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "rate {rate} is not a multiple of 1/{trials}"
            );
        }
    }

    #[test]
    fn test_contested_rate_strictly_between_zero_and_one() {
        let enemy = custom_enemy(10.0, 2.0);
        let mut rng = StudyRng::new(42);

        let rate = survival_rate(
            &mut rng,
            &contested_build(),
            &enemy,
            Difficulty::Easy,
            200,
            false,
        );
        assert!(rate > 0.0 && rate < 1.0, "rate {rate} should be contested");
    }

    #[test]
    fn test_harmless_enemy_rate_is_one() {
        let enemy = custom_enemy(10.0, 0.0);
        let mut rng = StudyRng::new(42);

        let rate = survival_rate(
            &mut rng,
            &contested_build(),
            &enemy,
            Difficulty::Impossible,
            200,
            false,
        );
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_degenerate_build_rate_is_zero() {
        let enemy = custom_enemy(10.0, 2.0);
        let build = Build {
            health: 30,
            damage: 0,
            damage_dealer: false,
            evolution: false,
        };
        let mut rng = StudyRng::new(42);

        let rate = survival_rate(&mut rng, &build, &enemy, Difficulty::Easy, 100, false);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_more_damage_does_not_hurt() {
        // Statistical monotonicity: same health, higher damage, large sample.
        let enemy = custom_enemy(10.0, 2.0);

        let weak = Build {
            health: 9,
            damage: 2,
            damage_dealer: false,
            evolution: false,
        };
        let strong = Build {
            health: 9,
            damage: 7,
            damage_dealer: false,
            evolution: false,
        };

        let mut rng_weak = StudyRng::new(42);
        let mut rng_strong = StudyRng::new(43);

        let rate_weak =
            survival_rate(&mut rng_weak, &weak, &enemy, Difficulty::Easy, 2000, false);
        let rate_strong = survival_rate(
            &mut rng_strong,
            &strong,
            &enemy,
            Difficulty::Easy,
            2000,
            false,
        );

        assert!(
            rate_strong >= rate_weak,
            "strong {rate_strong} should not fall below weak {rate_weak}"
        );
    }

    #[test]
    fn test_abilities_toggle_changes_effective_stats_only() {
        // Without flags set, the toggle must not change the draw pattern.
        let enemy = custom_enemy(10.0, 2.0);
        let build = contested_build();

        let mut rng_off = StudyRng::new(7);
        let mut rng_on = StudyRng::new(7);

        let off = survival_rate(&mut rng_off, &build, &enemy, Difficulty::Medium, 500, false);
        let on = survival_rate(&mut rng_on, &build, &enemy, Difficulty::Medium, 500, true);

        assert_eq!(off, on);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_zero_trials_panics() {
        let enemy = custom_enemy(10.0, 2.0);
        let mut rng = StudyRng::new(42);
        survival_rate(
            &mut rng,
            &contested_build(),
            &enemy,
            Difficulty::Easy,
            0,
            false,
        );
    }
}
