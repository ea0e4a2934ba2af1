use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NoDescriptorMatch,
    RewriteFailed,
    ReadError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NoDescriptorMatch => write!(f, "no-descriptor-match"),
            Rule::RewriteFailed => write!(f, "rewrite-failed"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

/// A single reportable finding tied to a file (and usually a call site).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_path: String,
    pub line: Option<usize>,
    pub col: Option<usize>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub details: Option<String>,
    pub source_line: Option<String>,
}

impl Diagnostic {
    pub fn no_descriptor_match(
        file_path: &str,
        line: usize,
        col: usize,
        name: &str,
        arity: usize,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(line),
            col: Some(col),
            message: name.to_string(),
            severity: Severity::Warning,
            rule: Rule::NoDescriptorMatch,
            details: Some(format!(
                "no descriptor registered for '{}' with {} argument{}",
                name,
                arity,
                if arity == 1 { "" } else { "s" }
            )),
            source_line,
        }
    }

    pub fn rewrite_failed(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: Some(1),
            col: Some(1),
            message: format!("Failed to rewrite: {}", error),
            severity: Severity::Error,
            rule: Rule::RewriteFailed,
            details: None,
            source_line: None,
        }
    }

    pub fn read_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: None,
            col: None,
            message: format!("Failed to read: {}", error),
            severity: Severity::Error,
            rule: Rule::ReadError,
            details: None,
            source_line: None,
        }
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by file_path, then line, col, message. The message comparison
        // keeps output deterministic when several sites share a position.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
