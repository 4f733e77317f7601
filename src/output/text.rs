use std::fmt::Write;

use indexmap::IndexMap;

use crate::checker::{Severity, Violation, ViolationKind};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        }
    }

    fn format_violation(&self, violation: &Violation, output: &mut String) {
        let icon = self.colorize(
            Self::severity_icon(violation.severity),
            Self::severity_color(violation.severity),
        );
        let _ = writeln!(output, "  {icon} {}", violation.path);
        let _ = writeln!(output, "     {}", violation.message);
    }

    fn format_summary(&self, errors: usize, warnings: usize) -> String {
        let errors_str = self.colorize(&errors.to_string(), ansi::RED);
        let warnings_str = self.colorize(&warnings.to_string(), ansi::YELLOW);
        format!("Summary: {errors_str} error(s), {warnings_str} warning(s)\n")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        if violations.is_empty() {
            let banner = self.colorize("✓", ansi::GREEN);
            return Ok(format!("{banner} Repository structure OK\n"));
        }

        let errors = violations.iter().filter(|v| v.is_error()).count();
        let warnings = violations.len() - errors;

        let mut grouped: IndexMap<ViolationKind, Vec<&Violation>> = IndexMap::new();
        for violation in violations {
            grouped.entry(violation.kind).or_default().push(violation);
        }

        let mut output = self.format_summary(errors, warnings);
        for (kind, group) in &grouped {
            let _ = writeln!(output, "\n[{kind}]");
            for violation in group {
                self.format_violation(violation, &mut output);
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
