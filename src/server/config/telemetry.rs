use tracing::{debug, info};

use super::{ConfigPathSource, ServerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_path_source(path: &std::path::Path, source: ConfigPathSource) {
    match source {
        ConfigPathSource::Cli => info!(
            target: "hello_world_mcp::config",
            path = %path.display(),
            "Loading configuration named by --config"
        ),
        ConfigPathSource::Env => info!(
            target: "hello_world_mcp::config",
            path = %path.display(),
            "Loading configuration using MCP_CONFIG_PATH environment variable"
        ),
        ConfigPathSource::Default => debug!(
            target: "hello_world_mcp::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "MCP_CONFIG_PATH not set; using optional default config.toml"
        ),
    }
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "hello_world_mcp::config",
        path = %config.source_path.display(),
        found = config.source_found,
        server_name = %config.server.name,
        custom_instructions = config.server.instructions.is_some(),
        greeting_clock = config.greeting.clock.as_str(),
        "Configuration loaded"
    );
}
