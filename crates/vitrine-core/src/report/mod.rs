//! Reporter: renders a [`RunSummary`] to deterministic text lines.
//!
//! Pure function of its input; writing the lines to a sink is the caller's
//! job. Rendering the same summary twice yields byte-identical output.

use crate::runner::RunSummary;

const RULE_WIDTH: usize = 60;

/// Render a summary as ordered lines: one header with totals, then one
/// block per demo in `summary.results` order.
pub fn render(summary: &RunSummary) -> Vec<String> {
    let mut lines = Vec::new();

    let mut header = format!(
        "{} demos: {} passed, {} failed",
        summary.total, summary.succeeded, summary.failed
    );
    if summary.interrupted {
        header.push_str(" (interrupted)");
    }
    lines.push(header);
    lines.push("-".repeat(RULE_WIDTH));

    for (name, result) in &summary.results {
        lines.push(format!("{} ... {}", name, result.status));
        for event in &result.events {
            lines.push(format!("  {event}"));
        }
        if let Some(error) = &result.error {
            lines.push(format!("  error: {error}"));
        }
        lines.push(String::new());
    }

    lines
}
