//! Command dispatch for the vkexpand CLI.
//!
//! Maps parsed arguments to the matching command handler and returns its
//! aggregated result for reporting.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use crate::commands::{CommandResult, expand::expand};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Expand(cmd)) => expand(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult::for_init(true))
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
