//! Random build generation under the point budget.

use crate::builds::build::{Build, ABILITY_POINT_THRESHOLD, DAMAGE_POINT_COST, POINT_BUDGET};
use crate::core::StudyRng;

/// Draw a random budget-valid build.
///
/// Health is allocated first (uniform 1..=30), then damage from whatever
/// the remainder affords (uniform 1..=remaining/3 when that range is
/// nonempty, else 0). Ability flags are drawn only when more than
/// [`ABILITY_POINT_THRESHOLD`] points are left over; otherwise both are
/// false. Draw order (health, damage when possible, DamageDealer then
/// Evolution when unlocked) is part of the reproducibility contract.
///
/// `damage == 0` builds are still returned; the search driver skips them.
pub fn random_build(rng: &mut StudyRng) -> Build {
    let health = rng.gen_range_u32(1..POINT_BUDGET + 1);
    let remaining = POINT_BUDGET - health;

    let max_damage = remaining / DAMAGE_POINT_COST;
    let damage = if max_damage == 0 {
        0
    } else {
        rng.gen_range_u32(1..max_damage + 1)
    };

    let leftover = remaining - DAMAGE_POINT_COST * damage;
    let (damage_dealer, evolution) = if leftover > ABILITY_POINT_THRESHOLD {
        (rng.gen_bool(), rng.gen_bool())
    } else {
        (false, false)
    };

    Build {
        health,
        damage,
        damage_dealer,
        evolution,
    }
}
