//! `greet` tool.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const GREET_TOOL_ID: &str = "greet";

/// Input for `greet`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GreetRequest {
    /// Name of the person to greet.
    pub name: String,
}

/// Build the welcome message for `name`. The name is echoed verbatim.
pub fn greet(name: &str) -> String {
    info!(target: "hello_world_mcp::tools", person = name, "Greeting");
    format!("你好，{name}！欢迎使用 MCP！🎉")
}
