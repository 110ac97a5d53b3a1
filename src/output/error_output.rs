//! Error and warning banners written to stderr.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::error::Error as _;
use std::io::{IsTerminal, Write};

use crate::error::BikeshareError;

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter, resolving `Auto` against stderr.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints a failure of the explorer: its kind, message, underlying cause and hint.
    pub fn print(&self, error: &BikeshareError) {
        let mut stderr = std::io::stderr().lock();
        self.write(&mut stderr, error);
    }

    /// Prints a warning message with consistent formatting.
    pub fn print_warning(&self, message: &str, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, None, suggestion);
    }

    /// Writes a [`BikeshareError`] banner. The innermost source becomes the detail line.
    pub fn write<W: Write>(&self, w: &mut W, error: &BikeshareError) {
        let detail = root_cause(error);
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    /// Writes error to a writer.
    ///
    /// Format: `✖ {error_type}: {message}`
    ///         `  × {detail}` (optional)
    ///         `  help: {suggestion}` (optional)
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Failing to write to stderr while reporting an error is not recoverable.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    /// Writes warning to a writer.
    ///
    /// Format: `⚠ Warning: {message}`
    ///         `  × {detail}` (optional)
    ///         `  help: {suggestion}` (optional)
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// Deepest error in the source chain, if the error wraps another one.
fn root_cause(error: &BikeshareError) -> Option<String> {
    let mut cause = error.source()?;
    while let Some(next) = cause.source() {
        cause = next;
    }
    Some(cause.to_string())
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
