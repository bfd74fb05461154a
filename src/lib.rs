//! # survivor-sim
//!
//! A Monte Carlo ablation engine for the survivor combat rules: estimates
//! how survival probability responds to toggling two character abilities
//! (DamageDealer: +10% health, Evolution: +10% damage) across a grid of
//! (enemy variant, difficulty level) scenarios.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every scenario evaluates on its own seeded stream,
//!    derived from the base seed, the difficulty level, and the enemy name.
//!    Same configuration, same results.
//!
//! 2. **Fixed Draw Order**: the simulator and generator consume random
//!    draws in a documented order. That order is part of the contract, not
//!    an implementation accident.
//!
//! 3. **Closed Catalogs**: enemy variants and difficulty levels are closed
//!    enums mapping to fixed tables. No open extensibility.
//!
//! 4. **Pure Accumulation**: best-build tracking is a fold over sampled
//!    builds; no mutable state crosses scenario boundaries.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG streams and study configuration
//! - `enemies`: enemy variants and the stat catalog
//! - `combat`: difficulty table and the encounter simulator
//! - `builds`: point-budget character builds and random generation
//! - `study`: survival estimator, ablation driver, report rendering

pub mod builds;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod study;

// Re-export commonly used types
pub use crate::core::{ConfigError, StudyConfig, StudyRng, StudyRngState};

pub use crate::enemies::{Enemy, EnemyCatalog, EnemyVariant};

pub use crate::combat::{simulate, Difficulty, FightOutcome};

pub use crate::builds::{
    random_build, Build, ABILITY_POINT_THRESHOLD, DAMAGE_POINT_COST, POINT_BUDGET,
};

pub use crate::study::{
    render_report, run_study, survival_rate, write_report, ScenarioResult, StudyOutcome,
    StudyStats,
};
