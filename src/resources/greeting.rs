//! `greeting://{name}` resource.
use tracing::info;

use crate::lib::clock::ClockMode;

pub const GREETING_URI_TEMPLATE: &str = "greeting://{name}";
pub const GREETING_URI_PREFIX: &str = "greeting://";

/// Personalized greeting stamped with the current `HH:MM` from `clock`.
pub fn get_greeting(name: &str, clock: ClockMode) -> String {
    info!(
        target: "hello_world_mcp::resources",
        person = name,
        clock = clock.as_str(),
        "Getting greeting resource"
    );
    greeting_at(name, &clock.time_of_day())
}

pub fn greeting_at(name: &str, time_of_day: &str) -> String {
    format!("Hello, {name}! Current time is {time_of_day}. Have a great day!")
}
