//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow vkexpand
//! to be used as a library without printing side effects.

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘
use unicode_width::UnicodeWidthStr;

use crate::diagnostic::{Diagnostic, Severity};

/// Print diagnostics in a cargo-style format.
///
/// Diagnostics are sorted and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Notes
/// - Summary of total errors/warnings
pub fn print_report(diagnostics: &[Diagnostic]) {
    let mut sorted = diagnostics.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .filter_map(|d| d.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for diagnostic in &sorted {
        let line = diagnostic.line.unwrap_or(0);
        let col = diagnostic.col.unwrap_or(0);

        // Print severity and message (cargo-style)
        let severity_str = match diagnostic.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: \"{}\"  {}",
            severity_str,
            diagnostic.message,
            diagnostic.rule.to_string().dimmed().cyan()
        );

        // Print clickable location: --> path:line:col
        println!("  {} {}:{}:{}", "-->".blue(), diagnostic.file_path, line, col);

        // Print source context if available
        if let Some(source_line) = &diagnostic.source_line {
            let caret_char = match diagnostic.severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret pointing to the column (col is 1-based)
            // Use unicode display width for correct positioning
            let prefix = if col > 1 {
                source_line.chars().take(col - 1).collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            println!(
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }

        // Print details if present (cargo-style note)
        if let Some(details) = &diagnostic.details {
            println!(
                "{:>width$} {} {} {}",
                "",
                "=".blue(),
                "note:".bold(),
                details,
                width = max_line_width
            );
        }

        println!(); // Empty line between diagnostics
    }

    // Summary
    let total_errors = sorted
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let total_warnings = sorted
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print a success message when every processed file expanded cleanly.
///
/// Displays both how many files were looked at and how many were actually
/// rewritten, so a run that matched nothing is visible at a glance.
pub fn print_success(files_processed: usize, files_rewritten: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Processed {} source {}, expanded {} - no issues found",
            files_processed,
            if files_processed == 1 { "file" } else { "files" },
            files_rewritten
        )
        .green()
    );
}

/// Print a warning about paths the scanner could not access.
///
/// This is shown at the end of a run when paths were skipped.
pub fn print_skip_warning(skipped_count: usize, verbose: bool) {
    if skipped_count > 0 && !verbose {
        eprintln!(
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            skipped_count,
            "-v".cyan()
        );
    }
}
