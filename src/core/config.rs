//! Study configuration parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A configuration problem that must stop the study before any simulation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Difficulty levels outside 1..=4 have no enemy-count entry.
    #[error("difficulty level must be in 1..=4, got {0}")]
    InvalidDifficulty(u32),

    /// A zero trial count would divide by zero in the rate estimate.
    #[error("trials per build must be at least 1")]
    ZeroTrials,

    /// A zero sample count would search over nothing.
    #[error("build sample count must be at least 1")]
    ZeroBuildSamples,
}

/// Ablation study configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Random builds sampled per scenario (default: 2000).
    pub build_samples: usize,

    /// Simulated fights per build and ability setting (default: 200).
    /// Rates come out as exact multiples of `1 / trials_per_build`.
    pub trials_per_build: u32,

    /// Base seed for scenario stream derivation (default: 42).
    /// Same base seed produces identical results.
    pub seed_base: u64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            build_samples: 2000,
            trials_per_build: 200,
            seed_base: 42,
        }
    }
}

impl StudyConfig {
    /// Create a config with custom build sample count.
    pub fn with_build_samples(mut self, samples: usize) -> Self {
        self.build_samples = samples;
        self
    }

    /// Create a config with custom trials per build.
    pub fn with_trials_per_build(mut self, trials: u32) -> Self {
        self.trials_per_build = trials;
        self
    }

    /// Create a config with custom base seed.
    pub fn with_seed_base(mut self, seed: u64) -> Self {
        self.seed_base = seed;
        self
    }

    /// Check the configuration before running anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build_samples == 0 {
            return Err(ConfigError::ZeroBuildSamples);
        }
        if self.trials_per_build == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudyConfig::default();
        assert_eq!(config.build_samples, 2000);
        assert_eq!(config.trials_per_build, 200);
        assert_eq!(config.seed_base, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = StudyConfig::default()
            .with_build_samples(500)
            .with_trials_per_build(50)
            .with_seed_base(123);

        assert_eq!(config.build_samples, 500);
        assert_eq!(config.trials_per_build, 50);
        assert_eq!(config.seed_base, 123);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let config = StudyConfig::default().with_trials_per_build(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTrials));
    }

    #[test]
    fn test_zero_build_samples_rejected() {
        let config = StudyConfig::default().with_build_samples(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBuildSamples));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidDifficulty(7).to_string(),
            "difficulty level must be in 1..=4, got 7"
        );
        assert_eq!(
            ConfigError::ZeroTrials.to_string(),
            "trials per build must be at least 1"
        );
    }

    #[test]
    fn test_serialization() {
        let config = StudyConfig::default().with_seed_base(999);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: StudyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
