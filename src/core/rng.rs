//! Deterministic random number generation with per-scenario streams.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Scenario streams**: Independent sequences per (seed, difficulty, enemy)
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use survivor_sim::core::StudyRng;
//!
//! let mut rng = StudyRng::new(42);
//! let mut other = StudyRng::new(42);
//! assert_eq!(rng.gen_range_u32(0..100), other.gen_range_u32(0..100));
//!
//! // Scenario streams are independent of one another
//! let mut easy = StudyRng::for_scenario(42, 1, "Zombie");
//! let mut hard = StudyRng::for_scenario(42, 3, "Zombie");
//! let easy_draws: Vec<u32> = (0..8).map(|_| easy.gen_range_u32(0..1000)).collect();
//! let hard_draws: Vec<u32> = (0..8).map(|_| hard.gen_range_u32(0..1000)).collect();
//! assert_ne!(easy_draws, hard_draws);
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing all simulation draws.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// One instance is created per scenario so results for one scenario are
/// unaffected by how many draws any other scenario consumed.
#[derive(Clone, Debug)]
pub struct StudyRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl StudyRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create the independent stream for one scenario.
    ///
    /// The stream seed hashes the base seed together with the difficulty
    /// level and the enemy name. `DefaultHasher` uses fixed SipHash keys,
    /// so the derivation is stable from run to run.
    #[must_use]
    pub fn for_scenario(seed_base: u64, difficulty_level: u32, enemy_name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        seed_base.hash(&mut hasher);
        difficulty_level.hash(&mut hasher);
        enemy_name.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fair coin flip.
    pub fn gen_bool(&mut self) -> bool {
        self.inner.gen()
    }

    /// Draw a uniform integer in the given range.
    pub fn gen_range_u32(&mut self, range: Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> StudyRngState {
        StudyRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore a stream from a saved state.
    #[must_use]
    pub fn from_state(state: &StudyRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// draws the stream has produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRngState {
    /// Original stream seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
