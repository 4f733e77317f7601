use std::fmt;

/// Category of a rule-check failure.
///
/// `ForbiddenDirectory` covers every "a prohibited entry exists at this
/// path" finding, including file-level ones (nested manifests, shell
/// scripts). The kind names the class of problem, not the entry's file
/// type, and consumers key on these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    ForbiddenDirectory,
    LargeFile,
    StructuralViolation,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForbiddenDirectory => "forbidden-directory",
            Self::LargeFile => "large-file",
            Self::StructuralViolation => "structural-violation",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a violation. Only `Error` affects the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single rule-check failure.
///
/// `path` is relative to the repository root with forward-slash
/// separators; `message` explains the fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    #[must_use]
    pub const fn new(kind: ViolationKind, path: String, message: String, severity: Severity) -> Self {
        Self {
            kind,
            path,
            message,
            severity,
        }
    }

    /// A prohibited directory or file exists at `path`.
    #[must_use]
    pub const fn forbidden(path: String, message: String) -> Self {
        Self::new(
            ViolationKind::ForbiddenDirectory,
            path,
            message,
            Severity::Error,
        )
    }

    /// A file violates location or naming conventions.
    #[must_use]
    pub const fn structural(path: String, message: String) -> Self {
        Self::new(
            ViolationKind::StructuralViolation,
            path,
            message,
            Severity::Error,
        )
    }

    /// A fixture exceeds the uncompressed size budget. Reported only.
    #[must_use]
    pub const fn large_file(path: String, message: String) -> Self {
        Self::new(ViolationKind::LargeFile, path, message, Severity::Warning)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
