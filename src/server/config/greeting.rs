use std::path::Path;

use serde::Deserialize;

use crate::lib::{clock::ClockMode, errors::ConfigError};

/// Settings for the `greeting://{name}` resource.
#[derive(Debug, Clone, Default)]
pub struct GreetingSection {
    pub clock: ClockMode,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawGreetingSection {
    pub clock: Option<String>,
}

pub fn parse_greeting_section(
    raw: Option<RawGreetingSection>,
    path: &Path,
) -> Result<GreetingSection, ConfigError> {
    let greeting_raw = raw.unwrap_or_default();
    let clock = match greeting_raw.clock {
        Some(value) => value
            .parse::<ClockMode>()
            .map_err(|message| ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "greeting.clock",
                message,
            })?,
        None => ClockMode::default(),
    };
    Ok(GreetingSection { clock })
}
