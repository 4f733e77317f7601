mod text;

pub use text::{ColorMode, TextFormatter};

use crate::checker::Violation;
use crate::error::Result;

/// Trait for formatting a validation run into a report.
pub trait OutputFormatter {
    /// Format the merged violation list into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, violations: &[Violation]) -> Result<String>;
}
