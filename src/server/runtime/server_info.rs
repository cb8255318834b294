use crate::server::config::ServerConfig;

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(config: &ServerConfig) -> String {
    if let Some(custom) = &config.server.instructions {
        return custom.clone();
    }
    let source = if config.source_found {
        format!("Loaded config {}", config.source_path.display())
    } else {
        "Using built-in defaults".to_string()
    };
    format!(
        "{source}; serving {name} over stdio. Tools: greet(name), add(a, b), multiply(a, b). Resources: info://server, greeting://{{name}}.",
        name = config.server.name,
    )
}
