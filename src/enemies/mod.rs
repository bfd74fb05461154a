//! Enemy variants and the stat catalog.
//!
//! The variant set is closed: the source rules model enemies as
//! subclasses, represented here as an enum mapping to fixed stat pairs.

pub mod catalog;
pub mod definition;

pub use catalog::EnemyCatalog;
pub use definition::{Enemy, EnemyVariant};
