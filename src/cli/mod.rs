//! CLI entrypoint module structure.
use anyhow::Result;

use crate::resources::get_server_info;

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchProfileArgs, ParsedCommand};
pub use profile::{build_launch_args, resolve_config_path, LaunchProfile};

/// Execute CLI command mode and return the text to print on stdout.
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Info => Ok(get_server_info()),
    }
}
