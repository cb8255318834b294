use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_SERVER_NAME: &str = "hello-world-server";
const MAX_SERVER_NAME_LEN: usize = 64;

/// Identity advertised to MCP clients during initialization.
#[derive(Debug, Clone)]
pub struct ServerSection {
    pub name: String,
    pub instructions: Option<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            instructions: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServerSection {
    pub name: Option<String>,
    pub instructions: Option<String>,
}

pub fn parse_server_section(
    raw: Option<RawServerSection>,
    path: &Path,
) -> Result<ServerSection, ConfigError> {
    let server_raw = raw.unwrap_or_default();
    let name = match server_raw.name {
        Some(name) => validate_name(name, path)?,
        None => DEFAULT_SERVER_NAME.to_string(),
    };
    let instructions = server_raw
        .instructions
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    Ok(ServerSection { name, instructions })
}

fn validate_name(name: String, path: &Path) -> Result<String, ConfigError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "server.name",
            message: "Use a non-empty server name".into(),
        });
    }
    if trimmed.chars().count() > MAX_SERVER_NAME_LEN {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "server.name",
            message: format!("Use at most {MAX_SERVER_NAME_LEN} characters"),
        });
    }
    Ok(trimmed.to_string())
}
