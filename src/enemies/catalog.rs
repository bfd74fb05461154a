//! Enemy catalog for stat lookup.
//!
//! The `EnemyCatalog` stores one stat record per variant. It provides
//! by-variant lookup and iteration in declaration order; the driver relies
//! on that order for deterministic reporting.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::definition::{Enemy, EnemyVariant};

/// Catalog of enemy stat records.
///
/// ## Example
///
/// ```
/// use survivor_sim::enemies::{EnemyCatalog, EnemyVariant};
///
/// let catalog = EnemyCatalog::standard();
/// let zombie = catalog.get_unchecked(EnemyVariant::Zombie);
/// assert_eq!(zombie.name(), "Zombie");
/// assert_eq!(catalog.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnemyCatalog {
    entries: SmallVec<[Enemy; 4]>,
    index: FxHashMap<EnemyVariant, usize>,
}

impl EnemyCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog with every variant's standard record, in declaration order.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for variant in EnemyVariant::ALL {
            catalog.register(Enemy::new(variant));
        }
        catalog
    }

    /// Register an enemy record.
    ///
    /// Panics if the variant is already registered.
    pub fn register(&mut self, enemy: Enemy) {
        if self.index.contains_key(&enemy.variant) {
            panic!("Enemy variant {:?} already registered", enemy.variant);
        }
        self.index.insert(enemy.variant, self.entries.len());
        self.entries.push(enemy);
    }

    /// Get a record by variant.
    #[must_use]
    pub fn get(&self, variant: EnemyVariant) -> Option<&Enemy> {
        self.index.get(&variant).map(|&i| &self.entries[i])
    }

    /// Get a record by variant, panicking if not found.
    ///
    /// A missing variant is a programmer error, not a runtime condition.
    #[must_use]
    pub fn get_unchecked(&self, variant: EnemyVariant) -> &Enemy {
        self.get(variant).expect("Enemy variant not in catalog")
    }

    /// Check whether a variant is registered.
    #[must_use]
    pub fn contains(&self, variant: EnemyVariant) -> bool {
        self.index.contains_key(&variant)
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.entries.iter()
    }
}
