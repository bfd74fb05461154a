//! Plain-text rendering of study results.
//!
//! One line per scenario, with a `---` separator closing each
//! difficulty's enemy group. Rates are rounded at display time only; the
//! stored delta is never rounded before subtraction.

use std::io::{self, Write};

use crate::combat::Difficulty;
use crate::study::driver::ScenarioResult;

/// Write the scenario lines and group separators to `w`.
///
/// Results are expected in driver order (difficulty ascending, then enemy
/// declaration order); a separator is emitted every time the difficulty
/// changes and after the final group.
pub fn write_report<W: Write>(w: &mut W, results: &[ScenarioResult]) -> io::Result<()> {
    let mut current: Option<Difficulty> = None;

    for result in results {
        if let Some(previous) = current {
            if previous != result.difficulty {
                writeln!(w, "---")?;
            }
        }
        current = Some(result.difficulty);

        writeln!(
            w,
            "Enemy={} (H={:.0} D={:.0}) | Difficulty={} | OFF={:.2}% | ON={:.2}% | delta={:.2}%",
            result.enemy.name(),
            result.enemy.base_health,
            result.enemy.base_damage,
            result.difficulty.label(),
            result.best_rate_off * 100.0,
            result.best_rate_on * 100.0,
            result.delta * 100.0,
        )?;
    }

    if current.is_some() {
        writeln!(w, "---")?;
    }

    Ok(())
}

/// Render the report to a `String`.
#[must_use]
pub fn render_report(results: &[ScenarioResult]) -> String {
    let mut buffer = Vec::new();
    write_report(&mut buffer, results).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("report is valid UTF-8")
}
