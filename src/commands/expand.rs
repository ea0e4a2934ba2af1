//! The expand command: scan, filter, and rewrite source files.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::cli::args::ExpandCommand;
use crate::config::{CONFIG_FILE_NAME, Config, RunSettings, load_config};
use crate::diagnostic::Diagnostic;
use crate::expand::{ExpandOptions, expand_source};
use crate::registry::Registry;
use crate::scan::scan_files;

use super::{CommandResult, CommandSummary, ExpandSummary};

/// Per-file result once the pipeline has run over its content.
struct FileOutcome {
    diagnostics: Vec<Diagnostic>,
    rewritten: bool,
}

pub fn expand(cmd: ExpandCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let settings = RunSettings {
        verbosity: args.common.verbose as u8,
        debug: args.debug,
        strict: args.strict,
    };

    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    let mut config = loaded.config;
    if let Some(root) = &args.common.source_root {
        config.source_root = root.to_string_lossy().into_owned();
    }
    if settings.verbose() {
        if loaded.from_file {
            eprintln!("Using configuration from {}", CONFIG_FILE_NAME);
        } else {
            eprintln!("No {} found, using defaults", CONFIG_FILE_NAME);
        }
    }

    let registry = Registry::builtin()?;
    let options = ExpandOptions {
        marker: config.marker.clone(),
        ignore: config.ignore_methods.iter().cloned().collect(),
    };

    let (mut files, skipped_count) = collect_input_files(&args.paths, &config, settings.verbose());
    // Never feed previously derived output files back through the pipeline.
    if !config.output_suffix.is_empty() {
        files.retain(|f| !f.contains(&config.output_suffix));
    }
    files.sort();

    let outcomes = files
        .par_iter()
        .map(|path| process_file(path, &registry, &options, &config, &args_view(&args), settings))
        .collect::<Result<Vec<_>>>()?;

    let mut diagnostics = Vec::new();
    let mut files_processed = 0;
    let mut files_rewritten = 0;
    for outcome in outcomes.into_iter().flatten() {
        files_processed += 1;
        if outcome.rewritten {
            files_rewritten += 1;
        }
        diagnostics.extend(outcome.diagnostics);
    }
    diagnostics.sort();

    Ok(CommandResult {
        summary: CommandSummary::Expand(ExpandSummary {
            dry_run: args.dry_run,
        }),
        diagnostics,
        files_processed,
        files_rewritten,
        skipped_count,
    })
}

/// The subset of expand arguments the per-file worker needs.
#[derive(Clone, Copy)]
struct WriteMode {
    dry_run: bool,
    in_place: bool,
}

fn args_view(args: &crate::cli::args::ExpandArgs) -> WriteMode {
    WriteMode {
        dry_run: args.dry_run,
        in_place: args.in_place,
    }
}

/// Resolve explicit paths, or fall back to scanning the source root.
fn collect_input_files(paths: &[PathBuf], config: &Config, verbose: bool) -> (Vec<String>, usize) {
    if paths.is_empty() {
        let result = scan_files(
            &config.source_root,
            &config.includes,
            &config.ignores,
            &config.source_extensions,
            verbose,
        );
        return (result.files.into_iter().collect(), result.skipped_count);
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;
    for path in paths {
        if path.is_dir() {
            let result = scan_files(
                &path.to_string_lossy(),
                &config.includes,
                &config.ignores,
                &config.source_extensions,
                verbose,
            );
            skipped_count += result.skipped_count;
            files.extend(result.files);
        } else if path.is_file() {
            files.push(path.to_string_lossy().into_owned());
        } else {
            skipped_count += 1;
            if verbose {
                eprintln!(
                    "{} No such file or directory: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }
    (files, skipped_count)
}

/// Run the pipeline over one file and write the result.
///
/// Returns `Ok(None)` when the file is filtered out by the target marker.
/// Per-file read and rewrite failures become error diagnostics unless
/// `--debug` is set, in which case they abort the whole run with context.
fn process_file(
    path: &str,
    registry: &Registry,
    options: &ExpandOptions,
    config: &Config,
    mode: &WriteMode,
    settings: RunSettings,
) -> Result<Option<FileOutcome>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            if settings.debug {
                return Err(e).with_context(|| format!("Failed to read {}", path));
            }
            return Ok(Some(FileOutcome {
                diagnostics: vec![Diagnostic::read_error(path, &e.to_string())],
                rewritten: false,
            }));
        }
    };

    if !config.target_marker.is_empty() && !content.contains(&config.target_marker) {
        if settings.verbose() {
            eprintln!("Skipping {} (no '{}')", path, config.target_marker);
        }
        return Ok(None);
    }

    let outcome = match expand_source(&content, registry, options, path) {
        Ok(outcome) => outcome,
        Err(e) => {
            if settings.debug {
                return Err(e.context(format!("Failed to rewrite {}", path)));
            }
            return Ok(Some(FileOutcome {
                diagnostics: vec![Diagnostic::rewrite_failed(path, &e.to_string())],
                rewritten: false,
            }));
        }
    };

    let rewritten = outcome.changed(&content);
    if rewritten && !mode.dry_run {
        let output = if mode.in_place {
            PathBuf::from(path)
        } else {
            derive_output_path(Path::new(path), &config.output_suffix)
        };
        write_if_changed(&output, &outcome.text)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        if settings.verbose() {
            eprintln!("Expanded {} -> {}", path, output.display());
        }
    }

    Ok(Some(FileOutcome {
        diagnostics: outcome.diagnostics,
        rewritten,
    }))
}

/// `triangle.cpp` with suffix `__expanded__` becomes `triangle__expanded__.cpp`.
fn derive_output_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let file_name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext),
        None => format!("{}{}", stem, suffix),
    };
    path.with_file_name(file_name)
}

/// Write only when the on-disk content differs, returning whether a write
/// happened. Keeps mtimes stable across repeated runs.
fn write_if_changed(path: &Path, text: &str) -> Result<bool> {
    if let Result::Ok(existing) = fs::read_to_string(path)
        && existing == text
    {
        return Ok(false);
    }
    fs::write(path, text)?;
    Ok(true)
}
