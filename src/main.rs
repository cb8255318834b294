//! Entry point for the Hello World MCP server.
use std::{process::ExitCode, time::Duration};

use clap::Parser;
use hello_world_mcp::{
    cli::{execute_cli_command, CliCommand, LaunchProfile, LaunchProfileArgs, ParsedCommand},
    lib::telemetry,
    server::{
        config::ServerConfig,
        runtime::{self, InterruptListener, RuntimeExit},
    },
};

/// The blocking stdin reader cannot be cancelled, so shutdown does not wait for it.
const RUNTIME_SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => return RuntimeExit::from_error(err).report(),
    };

    let exit_code = runtime.block_on(async {
        match bootstrap().await {
            Ok(_) => ExitCode::SUCCESS,
            Err(exit) => exit.report(),
        }
    });
    runtime.shutdown_timeout(RUNTIME_SHUTDOWN_GRACE);
    exit_code
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    let interrupt = InterruptListener::install();
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::RunServer(profile) => run_server(profile, &interrupt).await,
        ParsedCommand::Cli(command) => handle_cli_command(command),
    }
}

async fn run_server(
    profile: LaunchProfile,
    interrupt: &InterruptListener,
) -> Result<(), RuntimeExit> {
    let config = ServerConfig::load_from_path(profile.config_path.clone(), profile.config_source)
        .map_err(RuntimeExit::from_error)?;
    runtime::run_server(profile, config, interrupt.shutdown_token()).await
}

fn handle_cli_command(command: CliCommand) -> Result<(), RuntimeExit> {
    let message = execute_cli_command(command).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(())
}
