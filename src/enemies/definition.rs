//! Enemy definitions: the closed variant set and its stat records.

use serde::{Deserialize, Serialize};

/// The closed set of enemy variants.
///
/// Covers the three combat archetypes: a baseline bruiser, a fragile
/// hard-hitter, and a durable weak-hitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyVariant {
    /// Baseline: moderate health, moderate damage.
    Zombie,
    /// Fragile but hits hard.
    Vampire,
    /// Very durable, weak hits.
    BigSlime,
}

impl EnemyVariant {
    /// All variants, in catalog declaration order.
    pub const ALL: [EnemyVariant; 3] = [
        EnemyVariant::Zombie,
        EnemyVariant::Vampire,
        EnemyVariant::BigSlime,
    ];

    /// Display name, unique per variant.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EnemyVariant::Zombie => "Zombie",
            EnemyVariant::Vampire => "Vampire",
            EnemyVariant::BigSlime => "Big Slime",
        }
    }

    /// Fixed `(base_health, base_damage)` pair for this variant.
    #[must_use]
    pub fn base_stats(self) -> (f64, f64) {
        match self {
            EnemyVariant::Zombie => (10.0, 3.0),
            EnemyVariant::Vampire => (6.0, 5.0),
            EnemyVariant::BigSlime => (24.0, 2.0),
        }
    }
}

/// Immutable enemy stat record.
///
/// Created once at catalog construction and shared read-only across all
/// simulations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Which variant this record describes.
    pub variant: EnemyVariant,
    /// Health each spawned instance of this enemy starts with.
    pub base_health: f64,
    /// Damage dealt per landed blow.
    pub base_damage: f64,
}

impl Enemy {
    /// Create the standard record for a variant.
    #[must_use]
    pub fn new(variant: EnemyVariant) -> Self {
        let (base_health, base_damage) = variant.base_stats();
        Self {
            variant,
            base_health,
            base_damage,
        }
    }

    /// The variant's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.variant.name()
    }
}
