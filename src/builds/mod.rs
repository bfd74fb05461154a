//! Point-budget character builds and their random generation.

pub mod build;
pub mod generator;

pub use build::{Build, ABILITY_POINT_THRESHOLD, DAMAGE_POINT_COST, POINT_BUDGET};
pub use generator::random_build;
