//! Javadoc checking options

use super::errors::Severity;

/// How a category of Javadoc problems is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProblemSeverity {
    Error,
    Warning,
    #[default]
    Ignore,
}

impl ProblemSeverity {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignore)
    }

    /// Diagnostic severity, `None` when ignored.
    pub fn to_severity(&self) -> Option<Severity> {
        match self {
            Self::Error => Some(Severity::Error),
            Self::Warning => Some(Severity::Warning),
            Self::Ignore => None,
        }
    }
}

/// Options controlling how much work the Javadoc parser does.
///
/// Read-only for the duration of a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavadocOptions {
    /// Malformed tags and references
    pub invalid_javadoc: ProblemSeverity,
    /// Tags missing for parameters, thrown types or the return value
    pub missing_javadoc_tags: ProblemSeverity,
    /// Declarations without a documentation comment
    pub missing_javadoc_comments: ProblemSeverity,
}

impl JavadocOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invalid_javadoc(mut self, severity: ProblemSeverity) -> Self {
        self.invalid_javadoc = severity;
        self
    }

    pub fn with_missing_javadoc_tags(mut self, severity: ProblemSeverity) -> Self {
        self.missing_javadoc_tags = severity;
        self
    }

    pub fn with_missing_javadoc_comments(mut self, severity: ProblemSeverity) -> Self {
        self.missing_javadoc_comments = severity;
        self
    }

    /// Full tag parsing is needed.
    pub fn check_javadoc(&self) -> bool {
        !self.invalid_javadoc.is_ignored() || !self.missing_javadoc_tags.is_ignored()
    }

    /// A Javadoc node must exist even when tags are not parsed, so that a
    /// later pass can tell documented declarations from undocumented ones.
    pub fn needs_javadoc_node(&self) -> bool {
        self.check_javadoc() || !self.missing_javadoc_comments.is_ignored()
    }

    /// Severity of diagnostics for dropped tags.
    pub fn invalid_tag_severity(&self) -> Severity {
        self.invalid_javadoc
            .to_severity()
            .unwrap_or(Severity::Warning)
    }
}
