//! `info://server` resource.
use tracing::info;

pub const SERVER_INFO_URI: &str = "info://server";

const SERVER_INFO_TEXT: &str = concat!(
    "MCP Hello World Server\n",
    "======================\n",
    "\n",
    "Version: ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Language: Rust\n",
    "SDK: rmcp\n",
    "\n",
    "Available Tools:\n",
    "- greet(name: string) - Greet someone by name\n",
    "- add(a: integer, b: integer) - Add two integers\n",
    "- multiply(a: integer, b: integer) - Multiply two integers\n",
    "\n",
    "Available Resources:\n",
    "- greeting://{name} - Personalized greeting\n",
    "- info://server - Server information\n",
);

/// Fixed description of this server. Takes no inputs.
pub fn get_server_info() -> String {
    info!(target: "hello_world_mcp::resources", "Getting server info resource");
    SERVER_INFO_TEXT.to_string()
}
