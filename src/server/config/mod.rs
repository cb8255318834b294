//! Load and validate server configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod greeting;
pub mod server;
pub mod telemetry;

pub use greeting::{parse_greeting_section, GreetingSection, RawGreetingSection};
pub use server::{parse_server_section, RawServerSection, ServerSection, DEFAULT_SERVER_NAME};

pub const CONFIG_ENV_KEY: &str = "MCP_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathSource {
    Cli,
    Env,
    Default,
}

impl ConfigPathSource {
    /// Explicitly named files must exist; the default file is optional.
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, ConfigPathSource::Default)
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub greeting: GreetingSection,
    pub source_path: PathBuf,
    pub source_found: bool,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
    greeting: Option<RawGreetingSection>,
}

impl ServerConfig {
    /// Built-in defaults, used when no configuration file is present.
    pub fn with_defaults(source_path: PathBuf) -> Self {
        Self {
            server: ServerSection::default(),
            greeting: GreetingSection::default(),
            source_path,
            source_found: false,
        }
    }

    /// Load configuration from `path`, tolerating a missing file only for the default path.
    pub fn load_from_path(path: PathBuf, source: ConfigPathSource) -> Result<Self, ConfigError> {
        telemetry::log_path_source(&path, source);
        info!(
            target: "hello_world_mcp::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let found = path.is_file();
        let builder = config::Config::builder().add_source(
            config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                .required(source.is_explicit()),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "hello_world_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "hello_world_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone(), found).map_err(|err| {
            error!(
                target: "hello_world_mcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawServerConfig, path: PathBuf, found: bool) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, &path)?;
        let greeting = parse_greeting_section(raw.greeting, &path)?;

        Ok(Self {
            server,
            greeting,
            source_path: path,
            source_found: found,
        })
    }
}
