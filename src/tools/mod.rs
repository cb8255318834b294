//! MCP tools registered on the server and helper functions for the router.

pub mod arithmetic;
pub mod greet;

use rmcp::handler::server::router::tool::ToolRouter;

pub use arithmetic::{
    add, multiply, overflow_to_error_data, ArithmeticRequest, ArithmeticResponse, ADD_TOOL_ID,
    MULTIPLY_TOOL_ID,
};
pub use greet::{greet, GreetRequest, GREET_TOOL_ID};

pub type ServerToolRouter<S> = ToolRouter<S>;

/// Names of every registered tool, in registration order.
pub const TOOL_IDS: &[&str] = &[GREET_TOOL_ID, ADD_TOOL_ID, MULTIPLY_TOOL_ID];

/// Helper for building a tool router.
pub fn build_router<S>(builder: impl FnOnce() -> ServerToolRouter<S>) -> ServerToolRouter<S>
where
    S: Send + Sync + 'static,
{
    builder()
}
