//! Shared library modules providing error types, clock helpers, and telemetry initialization.

pub mod clock;
pub mod errors;
pub mod telemetry;
