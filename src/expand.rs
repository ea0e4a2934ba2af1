//! The per-file pipeline: locate, classify, match, rewrite.
//!
//! Operates on in-memory text only; reading and writing files is the
//! commands layer's concern.

use std::collections::HashSet;

use anyhow::Result;

use crate::classify::{UseCase, classify};
use crate::diagnostic::Diagnostic;
use crate::locate::locate_all;
use crate::registry::{Binding, Registry};
use crate::rewrite;
use crate::utils::{line_col, source_line};

/// Per-run knobs affecting how a single source text is expanded.
#[derive(Debug, Clone)]
pub struct ExpandOptions {
    /// Substring identifying a factory invocation.
    pub marker: String,
    /// Factory names to skip entirely.
    pub ignore: HashSet<String>,
}

/// The rewritten text plus everything worth reporting about it.
#[derive(Debug)]
pub struct ExpandOutcome {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExpandOutcome {
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Run the full pipeline over one source text.
///
/// Sites the registry cannot resolve produce a warning diagnostic and are
/// left untouched; a structural failure during rewriting (the text around a
/// classified site does not have the expected shape) aborts the whole file.
pub fn expand_source(
    source: &str,
    registry: &Registry,
    options: &ExpandOptions,
    file_path: &str,
) -> Result<ExpandOutcome> {
    let mut sites = locate_all(source, &options.marker, &options.ignore);

    let mut prev_end = 0;
    let mut prev_use_case = UseCase::Unknown;
    let mut diagnostics = Vec::new();
    for site in &mut sites {
        site.use_case = classify(source, site.start, prev_end, prev_use_case);
        prev_end = site.end;
        prev_use_case = site.use_case;

        site.binding = registry.lookup(&site.name, site.args.len());
        if site.binding == Binding::Unresolved {
            let (line, col) = line_col(source, site.start);
            diagnostics.push(Diagnostic::no_descriptor_match(
                file_path,
                line,
                col,
                &site.name,
                site.args.len(),
                Some(source_line(source, site.start)),
            ));
        }
    }

    let text = rewrite::apply(source, &sites)?;
    Ok(ExpandOutcome { text, diagnostics })
}
