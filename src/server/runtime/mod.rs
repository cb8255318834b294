//! MCP server startup and tool/resource registration.
mod server_info;
mod startup;
mod tool_registry;

pub use server_info::build_instructions;
pub use startup::{run_server, InterruptListener, RuntimeExit};
pub use tool_registry::HelloWorldServer;
