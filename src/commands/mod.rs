pub(crate) mod expand;

use crate::diagnostic::{Diagnostic, Severity};

/// What a command did, for reporting.
#[derive(Debug)]
pub enum CommandSummary {
    Expand(ExpandSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExpandSummary {
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Aggregated outcome of one command invocation.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub diagnostics: Vec<Diagnostic>,
    /// Files whose content was fed through the pipeline.
    pub files_processed: usize,
    /// Files whose expansion differs from the input.
    pub files_rewritten: usize,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

impl CommandResult {
    pub fn for_init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            diagnostics: Vec::new(),
            files_processed: 0,
            files_rewritten: 0,
            skipped_count: 0,
        }
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}
