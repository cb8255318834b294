//! `add` and `multiply` tools over 64-bit signed integers.
use rmcp::model::ErrorData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::lib::errors::{ArithmeticError, ARITHMETIC_OVERFLOW_ERROR};

pub const ADD_TOOL_ID: &str = "add";
pub const MULTIPLY_TOOL_ID: &str = "multiply";

/// Input shared by `add` and `multiply`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct ArithmeticRequest {
    /// First operand.
    pub a: i64,
    /// Second operand.
    pub b: i64,
}

/// Output shared by `add` and `multiply`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArithmeticResponse {
    pub result: i64,
}

pub fn add(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    info!(target: "hello_world_mcp::tools", a, b, "Adding");
    a.checked_add(b).ok_or(ArithmeticError::Overflow {
        operation: ADD_TOOL_ID,
        a,
        b,
    })
}

pub fn multiply(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    info!(target: "hello_world_mcp::tools", a, b, "Multiplying");
    a.checked_mul(b).ok_or(ArithmeticError::Overflow {
        operation: MULTIPLY_TOOL_ID,
        a,
        b,
    })
}

/// Convert an arithmetic failure into `ErrorData` for MCP clients.
pub fn overflow_to_error_data(err: ArithmeticError) -> ErrorData {
    warn!(target: "hello_world_mcp::tools", error = %err, "Arithmetic tool rejected input");
    match err {
        ArithmeticError::Overflow { operation, a, b } => ARITHMETIC_OVERFLOW_ERROR
            .builder()
            .retryable(false)
            .details(json!({ "operation": operation, "a": a, "b": b }))
            .build_or_internal(),
    }
}
