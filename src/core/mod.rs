//! Core building blocks: deterministic RNG streams and study configuration.
//!
//! Everything stochastic in the crate draws from a [`StudyRng`], and every
//! run is shaped by a validated [`StudyConfig`].

pub mod config;
pub mod rng;

pub use config::{ConfigError, StudyConfig};
pub use rng::{StudyRng, StudyRngState};
