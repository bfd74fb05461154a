//! Study run statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected while a study runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStats {
    /// Builds drawn across all scenarios, degenerate ones included.
    pub builds_sampled: u64,

    /// Builds skipped because they could not deal damage.
    pub degenerate_skipped: u64,

    /// Individual fights simulated.
    pub simulations_run: u64,

    /// Total wall-clock time (microseconds).
    pub time_us: u64,
}

impl StudyStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds that actually entered the search.
    #[must_use]
    pub fn builds_evaluated(&self) -> u64 {
        self.builds_sampled - self.degenerate_skipped
    }

    /// Calculate simulated fights per second.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.simulations_run as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
