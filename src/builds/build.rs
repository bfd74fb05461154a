//! The character build value type.

use serde::{Deserialize, Serialize};

/// Total points available to a build.
pub const POINT_BUDGET: u32 = 30;

/// Points one unit of damage costs (health costs 1 point per unit).
pub const DAMAGE_POINT_COST: u32 = 3;

/// Ability flags may only be set when more than this many points are left
/// unspent after allocating health and damage.
pub const ABILITY_POINT_THRESHOLD: u32 = 10;

/// Multiplier bonus each enabled ability grants to its stat.
const ABILITY_BONUS: f64 = 0.1;

/// A point-allocated character configuration.
///
/// Invariant: `health + 3 * damage <= 30`, with `health >= 1`. The
/// generator upholds this by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Health points, 1..=30. One budget point per unit.
    pub health: u32,
    /// Damage points, 0..=9. Three budget points per unit.
    pub damage: u32,
    /// DamageDealer ability: +10% health while abilities are enabled.
    pub damage_dealer: bool,
    /// Evolution ability: +10% damage while abilities are enabled.
    pub evolution: bool,
}

impl Build {
    /// Budget points this build spends on stats.
    #[must_use]
    pub fn spent_points(&self) -> u32 {
        self.health + DAMAGE_POINT_COST * self.damage
    }

    /// Budget points left unspent.
    #[must_use]
    pub fn leftover_points(&self) -> u32 {
        POINT_BUDGET - self.spent_points()
    }

    /// A build that cannot reduce enemy health; excluded from search.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.damage == 0
    }

    /// Health entering a fight, with the DamageDealer bonus when enabled.
    ///
    /// Computed fresh per call: the same build is evaluated under both
    /// ability-toggle states.
    #[must_use]
    pub fn effective_health(&self, abilities_enabled: bool) -> f64 {
        let health = f64::from(self.health);
        if abilities_enabled && self.damage_dealer {
            health * (1.0 + ABILITY_BONUS)
        } else {
            health
        }
    }

    /// Damage per melee tick, with the Evolution bonus when enabled.
    #[must_use]
    pub fn effective_damage(&self, abilities_enabled: bool) -> f64 {
        let damage = f64::from(self.damage);
        if abilities_enabled && self.evolution {
            damage * (1.0 + ABILITY_BONUS)
        } else {
            damage
        }
    }
}
