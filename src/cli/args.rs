//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! vkexpand commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `expand`: Rewrite initializer factory calls into field-by-field
//!   struct initialization
//! - `init`: Initialize a vkexpand configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Expand(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }

    /// Get the strict flag, which promotes warnings to failures.
    pub fn strict(&self) -> bool {
        match &self.command {
            Some(Command::Expand(cmd)) => cmd.args.strict,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Files or directories to expand (default: scan the source root)
    pub paths: Vec<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite the input file instead of writing a derived copy
    #[arg(long)]
    pub in_place: bool,

    /// Abort on the first per-file failure with full error context
    #[arg(long)]
    pub debug: bool,

    /// Treat warnings as failures for the exit status
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ExpandCommand {
    #[command(flatten)]
    pub args: ExpandArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand initializer factory calls into field-by-field struct initialization
    Expand(ExpandCommand),
    /// Initialize a new .vkexpandrc.json configuration file
    Init,
}
