//! Turns a command result into user-facing terminal output.

use colored::Colorize;

use crate::commands::{CommandResult, CommandSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::reporter;

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Init(summary) => {
            if summary.created {
                println!(
                    "{} Created {}",
                    reporter::SUCCESS_MARK.green(),
                    CONFIG_FILE_NAME
                );
            }
        }
        CommandSummary::Expand(summary) => {
            if result.diagnostics.is_empty() {
                reporter::print_success(result.files_processed, result.files_rewritten);
            } else {
                reporter::print_report(&result.diagnostics);
            }
            if summary.dry_run && result.files_rewritten > 0 {
                println!(
                    "{} (dry-run: no files were written)",
                    format!("{} file(s) would be expanded", result.files_rewritten).cyan()
                );
            }
            reporter::print_skip_warning(result.skipped_count, verbose);
        }
    }
}
