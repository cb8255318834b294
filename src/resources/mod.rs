//! MCP resources: the static `info://server` text and the `greeting://{name}` template.

pub mod greeting;
pub mod server_info;

use rmcp::model::{
    AnnotateAble, ErrorData, RawResource, RawResourceTemplate, Resource, ResourceTemplate,
};
use serde_json::Value;
use tracing::warn;

use crate::lib::{clock::ClockMode, errors::RESOURCE_NOT_FOUND_ERROR};

pub use greeting::{get_greeting, greeting_at, GREETING_URI_PREFIX, GREETING_URI_TEMPLATE};
pub use server_info::{get_server_info, SERVER_INFO_URI};

pub const TEXT_MIME_TYPE: &str = "text/plain";

/// A resource URI resolved against the registered resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRoute<'a> {
    ServerInfo,
    Greeting { name: &'a str },
}

impl<'a> ResourceRoute<'a> {
    /// Match `uri` against `info://server` and `greeting://{name}`.
    pub fn resolve(uri: &'a str) -> Option<Self> {
        if uri == SERVER_INFO_URI {
            return Some(ResourceRoute::ServerInfo);
        }
        let name = uri.strip_prefix(GREETING_URI_PREFIX)?;
        if name.is_empty() || name.contains('/') {
            return None;
        }
        Some(ResourceRoute::Greeting { name })
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ResourceRoute::ServerInfo => "server_info",
            ResourceRoute::Greeting { .. } => "greeting",
        }
    }

    /// Compute the text payload for this route.
    pub fn render(&self, clock: ClockMode) -> String {
        match self {
            ResourceRoute::ServerInfo => get_server_info(),
            ResourceRoute::Greeting { name } => get_greeting(name, clock),
        }
    }
}

/// Resources with a fixed URI, as returned by `resources/list`.
pub fn static_resources() -> Vec<Resource> {
    let mut info = RawResource::new(SERVER_INFO_URI, "server_info");
    info.description =
        Some("Server name, version, and the available tools and resources".to_string());
    info.mime_type = Some(TEXT_MIME_TYPE.to_string());
    vec![info.no_annotation()]
}

/// Parametrized resources, as returned by `resources/templates/list`.
pub fn resource_templates() -> Vec<ResourceTemplate> {
    let greeting = RawResourceTemplate {
        uri_template: GREETING_URI_TEMPLATE.to_string(),
        name: "greeting".to_string(),
        title: None,
        description: Some("Personalized greeting with the current time of day".to_string()),
        mime_type: Some(TEXT_MIME_TYPE.to_string()),
    };
    vec![greeting.no_annotation()]
}

/// Error returned when `uri` matches no registered resource.
pub fn not_found_error(uri: &str) -> ErrorData {
    warn!(target: "hello_world_mcp::resources", uri, "Unknown resource requested");
    RESOURCE_NOT_FOUND_ERROR
        .builder()
        .retryable(false)
        .with_context_field("uri", Value::String(uri.to_string()))
        .build_or_internal()
}
