//! Difficulty levels and their enemy-count table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// The closed set of difficulty levels.
///
/// Each level maps to a fixed number of enemies spawned per fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    /// All levels in ascending order; the driver walks the grid in this order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Parse a numeric level in 1..=4.
    pub fn from_level(level: u32) -> Result<Self, ConfigError> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            4 => Ok(Difficulty::Impossible),
            other => Err(ConfigError::InvalidDifficulty(other)),
        }
    }

    /// Numeric level in 1..=4.
    #[must_use]
    pub fn level(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Impossible => 4,
        }
    }

    /// Number of enemies spawned per fight at this level.
    #[must_use]
    pub fn enemy_count(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
            Difficulty::Impossible => 10,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_counts() {
        assert_eq!(Difficulty::Easy.enemy_count(), 3);
        assert_eq!(Difficulty::Medium.enemy_count(), 5);
        assert_eq!(Difficulty::Hard.enemy_count(), 7);
        assert_eq!(Difficulty::Impossible.enemy_count(), 10);
    }

    #[test]
    fn test_level_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(difficulty.level()), Ok(difficulty));
        }
    }

    #[test]
    fn test_invalid_levels_rejected() {
        assert_eq!(
            Difficulty::from_level(0),
            Err(ConfigError::InvalidDifficulty(0))
        );
        assert_eq!(
            Difficulty::from_level(5),
            Err(ConfigError::InvalidDifficulty(5))
        );
    }

    #[test]
    fn test_all_is_ascending() {
        let levels: Vec<_> = Difficulty::ALL.iter().map(|d| d.level()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Impossible.label(), "Impossible");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        let deserialized: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Difficulty::Hard);
    }
}
