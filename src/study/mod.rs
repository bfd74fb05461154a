//! The ablation study: survival estimation, scenario-grid driver, and
//! report rendering.

pub mod driver;
pub mod estimator;
pub mod report;
pub mod stats;

pub use driver::{run_study, ScenarioResult, StudyOutcome};
pub use estimator::survival_rate;
pub use report::{render_report, write_report};
pub use stats::StudyStats;
