//! The ablation search driver.
//!
//! Walks the (difficulty, enemy) grid, searches random builds under each
//! scenario's own seeded stream, and reports the best survival rate found
//! with abilities disabled vs. enabled.
//!
//! ## Stream discipline
//!
//! Each scenario consumes draws in a fixed order: build draw, then the
//! disabled-ability trials, then the enabled-ability trials, repeated per
//! sample. Scenarios never share a stream, so adding or removing one
//! scenario leaves every other scenario's result untouched.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::builds::{random_build, Build};
use crate::combat::Difficulty;
use crate::core::{ConfigError, StudyConfig, StudyRng};
use crate::enemies::{Enemy, EnemyCatalog};
use crate::study::estimator::survival_rate;
use crate::study::stats::StudyStats;

/// Aggregated result for one (enemy, difficulty) scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The enemy this scenario fought.
    pub enemy: Enemy,
    /// The difficulty this scenario ran at.
    pub difficulty: Difficulty,
    /// Best survival rate found with abilities disabled; -1.0 when no
    /// valid build was sampled.
    pub best_rate_off: f64,
    /// Best survival rate found with abilities enabled; -1.0 when no
    /// valid build was sampled.
    pub best_rate_on: f64,
    /// The first build that reached `best_rate_off`.
    pub best_build_off: Option<Build>,
    /// The first build that reached `best_rate_on`.
    pub best_build_on: Option<Build>,
    /// `best_rate_on - best_rate_off`, exact (no rounding before the
    /// subtraction).
    pub delta: f64,
}

/// Everything a study run produces.
#[derive(Clone, Debug, PartialEq)]
pub struct StudyOutcome {
    /// One result per scenario, difficulty ascending then enemy
    /// declaration order.
    pub results: Vec<ScenarioResult>,
    /// Run counters and timing.
    pub stats: StudyStats,
}

/// Running maximum over observed rates.
///
/// Strict comparison keeps the first build that reached the best rate;
/// later ties never overwrite it.
#[derive(Clone, Debug)]
struct BestSoFar {
    rate: f64,
    build: Option<Build>,
}

impl BestSoFar {
    fn new() -> Self {
        Self {
            rate: -1.0,
            build: None,
        }
    }

    fn observe(&mut self, rate: f64, build: Build) {
        if rate > self.rate {
            self.rate = rate;
            self.build = Some(build);
        }
    }
}

/// Fold state for one scenario's build search.
#[derive(Clone, Debug)]
struct ScenarioAccumulator {
    best_off: BestSoFar,
    best_on: BestSoFar,
}

impl ScenarioAccumulator {
    fn new() -> Self {
        Self {
            best_off: BestSoFar::new(),
            best_on: BestSoFar::new(),
        }
    }

    fn observe(&mut self, build: Build, rate_off: f64, rate_on: f64) {
        self.best_off.observe(rate_off, build);
        self.best_on.observe(rate_on, build);
    }

    fn finish(self, enemy: Enemy, difficulty: Difficulty) -> ScenarioResult {
        ScenarioResult {
            enemy,
            difficulty,
            delta: self.best_on.rate - self.best_off.rate,
            best_rate_off: self.best_off.rate,
            best_rate_on: self.best_on.rate,
            best_build_off: self.best_off.build,
            best_build_on: self.best_on.build,
        }
    }
}

/// Run the full ablation study over `difficulties` × the catalog.
///
/// Validates the configuration before any simulation runs. Results come
/// back in deterministic order: the given difficulty order (ascending for
/// [`Difficulty::ALL`]), then catalog declaration order within each
/// difficulty.
pub fn run_study(
    catalog: &EnemyCatalog,
    difficulties: &[Difficulty],
    config: &StudyConfig,
) -> Result<StudyOutcome, ConfigError> {
    config.validate()?;

    let start = Instant::now();
    let mut stats = StudyStats::new();
    let mut results = Vec::with_capacity(difficulties.len() * catalog.len());

    for &difficulty in difficulties {
        for enemy in catalog.iter() {
            results.push(run_scenario(enemy, difficulty, config, &mut stats));
        }
    }

    stats.time_us = start.elapsed().as_micros() as u64;

    Ok(StudyOutcome { results, stats })
}

/// Search one scenario on its own stream and fold out the best rates.
fn run_scenario(
    enemy: &Enemy,
    difficulty: Difficulty,
    config: &StudyConfig,
    stats: &mut StudyStats,
) -> ScenarioResult {
    let mut rng = StudyRng::for_scenario(config.seed_base, difficulty.level(), enemy.name());
    let mut acc = ScenarioAccumulator::new();

    for _ in 0..config.build_samples {
        let build = random_build(&mut rng);
        stats.builds_sampled += 1;

        if build.is_degenerate() {
            stats.degenerate_skipped += 1;
            continue;
        }

        let rate_off = survival_rate(
            &mut rng,
            &build,
            enemy,
            difficulty,
            config.trials_per_build,
            false,
        );
        let rate_on = survival_rate(
            &mut rng,
            &build,
            enemy,
            difficulty,
            config.trials_per_build,
            true,
        );
        stats.simulations_run += 2 * u64::from(config.trials_per_build);

        acc.observe(build, rate_off, rate_on);
    }

    acc.finish(enemy.clone(), difficulty)
}
