use std::{io, process::ExitCode};

use anyhow::Error;
use rmcp::ServiceExt;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::{
    cli::LaunchProfile,
    lib::telemetry::{emit_runtime_mode, RuntimeModeTelemetry},
    server::{
        config::ServerConfig,
        runtime::{build_instructions, HelloWorldServer},
    },
};

const STDIO_TRANSPORT: &str = "stdio";

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        error!(
            target: "hello_world_mcp::runtime",
            reason = %self.message,
            "Fatal error"
        );
        eprintln!("Fatal error: {}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Start the MCP server on stdio and block until the client leaves or `shutdown` is cancelled.
pub async fn run_server(
    profile: LaunchProfile,
    config: ServerConfig,
    shutdown: CancellationToken,
) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(&config);
    let server = HelloWorldServer::new(config.clone(), instructions.clone());

    emit_runtime_mode(&RuntimeModeTelemetry {
        transport: STDIO_TRANSPORT,
        server_name: &config.server.name,
        config_path: config.source_path.to_string_lossy().as_ref(),
        config_found: config.source_found,
        instructions: &instructions,
        launch_args: &profile.launch_args,
    });

    run_stdio(server, shutdown).await
}

async fn run_stdio(server: HelloWorldServer, shutdown: CancellationToken) -> Result<(), RuntimeExit> {
    info!(
        target: "hello_world_mcp::runtime",
        transport = STDIO_TRANSPORT,
        "Waiting for requests"
    );

    let running = tokio::select! {
        biased;
        _ = shutdown.cancelled() => {
            log_stopped_by_user();
            return Ok(());
        }
        served = server.serve_with_ct(rmcp::transport::stdio(), shutdown.clone()) => {
            served.map_err(RuntimeExit::from_error)?
        }
    };

    let reason = running.waiting().await.map_err(RuntimeExit::from_error)?;
    if shutdown.is_cancelled() {
        log_stopped_by_user();
    } else {
        info!(
            target: "hello_world_mcp::runtime",
            reason = ?reason,
            "MCP session ended"
        );
    }
    Ok(())
}

/// Cancels its token on Ctrl-C / SIGINT.
///
/// Install it before any other startup work: once registered, an interrupt no longer
/// terminates the process, it only cancels the token.
pub struct InterruptListener {
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl InterruptListener {
    /// Register the signal handler. Must be called inside the tokio runtime.
    pub fn install() -> Self {
        let shutdown = CancellationToken::new();
        let task = match register_interrupt() {
            Ok(mut interrupt) => {
                let token = shutdown.clone();
                Some(tokio::spawn(async move {
                    if interrupt.recv().await.is_some() {
                        info!(
                            target: "hello_world_mcp::runtime",
                            "Received interrupt signal"
                        );
                        token.cancel();
                    }
                }))
            }
            Err(err) => {
                warn!(
                    target: "hello_world_mcp::runtime",
                    error = %err,
                    "Failed to listen for interrupt signal"
                );
                None
            }
        };
        Self { shutdown, task }
    }

    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }
}

impl Drop for InterruptListener {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// `signal::ctrl_c()` only registers on first poll; these register on call.
#[cfg(unix)]
fn register_interrupt() -> io::Result<tokio::signal::unix::Signal> {
    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
}

#[cfg(windows)]
fn register_interrupt() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}

fn log_stopped_by_user() {
    info!(target: "hello_world_mcp::runtime", "Server stopped by user");
}
