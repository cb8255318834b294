//! Telemetry initialization and per-call span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr; stdout is reserved for the MCP transport.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording the start and finish of one tool or resource call.
pub struct CallSpan {
    span: Span,
    started_at: Instant,
    call_id: Uuid,
    surface: &'static str,
    name: &'static str,
}

impl CallSpan {
    /// Start a call span. `surface` is `tool` or `resource`.
    pub fn start(surface: &'static str, name: &'static str) -> Self {
        let call_id = Uuid::new_v4();
        let span = info_span!(
            target: "hello_world_mcp::calls",
            "mcp_call",
            %call_id,
            surface,
            name
        );
        Self {
            span,
            started_at: Instant::now(),
            call_id,
            surface,
            name,
        }
    }

    /// Run `f` inside the span.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        self.span.in_scope(f)
    }

    /// Close the span while recording status and elapsed time.
    pub fn finish(self, status: &'static str) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        info!(
            target: "hello_world_mcp::calls",
            call_id = %self.call_id,
            surface = self.surface,
            name = self.name,
            status = status,
            elapsed_us = elapsed_us,
            "Completed MCP call"
        );
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub transport: &'a str,
    pub server_name: &'a str,
    pub config_path: &'a str,
    pub config_found: bool,
    pub instructions: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "hello_world_mcp::runtime",
        transport = telemetry.transport,
        server_name = telemetry.server_name,
        config_path = telemetry.config_path,
        config_found = telemetry.config_found,
        instructions = telemetry.instructions,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
