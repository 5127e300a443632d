//! Console reporting for the conversion pipeline.
//!
//! A [`Reporter`] value is built once from the CLI flags and passed to the
//! pipeline explicitly; there is no process-wide silencing state. It only
//! gates informational stdout lines — diagnostics go to stderr from the
//! top-level driver and are never suppressed.
//!
//! Formatting follows the same split as the rest of the crate's text
//! generation: `format_*` functions are pure and return lines, `print_*`
//! wrappers write them to stdout.

use crate::convert::ConvertSummary;

/// Progress and summary printer with an explicit verbosity switch.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Reporter that prints nothing.
    pub fn quiet() -> Self {
        Self { verbose: false }
    }

    /// Print an informational line, unless silenced.
    pub fn info(&self, line: impl AsRef<str>) {
        if self.verbose {
            println!("{}", line.as_ref());
        }
    }
}

/// Format the post-conversion summary.
///
/// ```text
/// Image: 500x100 → 400x240 (resampled)
/// Position: (0, 70) on the top screen
/// Generated
///     generated/Includes/draw_image.hpp
///     generated/Sources/draw_image.cpp
///     generated/Sources/cheats.cpp
/// ```
pub fn format_summary(summary: &ConvertSummary) -> Vec<String> {
    let mut lines = Vec::new();

    if summary.resampled {
        lines.push(format!(
            "Image: {} \u{2192} {} (resampled)",
            summary.source, summary.dimensions
        ));
    } else {
        lines.push(format!("Image: {}", summary.source));
    }

    lines.push(format!(
        "Position: ({}, {}) on the {} screen",
        summary.position.x,
        summary.position.y,
        summary.target.name()
    ));

    lines.push("Generated".to_string());
    for file in &summary.files {
        lines.push(format!("    {}", file.display()));
    }

    lines
}

/// Print the summary through the reporter.
pub fn print_summary(reporter: &Reporter, summary: &ConvertSummary) {
    for line in format_summary(summary) {
        reporter.info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dimensions, Position, ScreenTarget};
    use std::path::PathBuf;

    fn sample_summary(resampled: bool) -> ConvertSummary {
        ConvertSummary {
            source: Dimensions::new(500, 100),
            dimensions: Dimensions::new(400, 240),
            resampled,
            position: Position { x: 0, y: 70 },
            target: ScreenTarget::Top,
            files: vec![
                PathBuf::from("generated/Includes/draw_image.hpp"),
                PathBuf::from("generated/Sources/draw_image.cpp"),
                PathBuf::from("generated/Sources/cheats.cpp"),
            ],
        }
    }

    #[test]
    fn summary_with_resample_shows_both_sizes() {
        let lines = format_summary(&sample_summary(true));
        assert_eq!(lines[0], "Image: 500x100 \u{2192} 400x240 (resampled)");
        assert_eq!(lines[1], "Position: (0, 70) on the top screen");
        assert_eq!(lines[2], "Generated");
        assert_eq!(lines[3], "    generated/Includes/draw_image.hpp");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn summary_without_resample_shows_single_size() {
        let mut summary = sample_summary(false);
        summary.source = Dimensions::new(100, 50);
        summary.dimensions = Dimensions::new(100, 50);
        let lines = format_summary(&summary);
        assert_eq!(lines[0], "Image: 100x50");
    }

    #[test]
    fn bottom_screen_named_in_position_line() {
        let mut summary = sample_summary(true);
        summary.target = ScreenTarget::Bottom;
        let lines = format_summary(&summary);
        assert!(lines[1].ends_with("on the bottom screen"));
    }
}
