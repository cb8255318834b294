use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{
        ErrorData, ListResourceTemplatesResult, ListResourcesResult, PaginatedRequestParam,
        ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, Json, RoleServer,
};

use crate::{
    lib::{errors::ArithmeticError, telemetry::CallSpan},
    resources::{self, ResourceRoute},
    server::config::ServerConfig,
    tools::{
        self, ArithmeticRequest, ArithmeticResponse, GreetRequest, ServerToolRouter,
        ADD_TOOL_ID, GREET_TOOL_ID, MULTIPLY_TOOL_ID,
    },
};

#[derive(Clone)]
pub struct HelloWorldServer {
    config: Arc<ServerConfig>,
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
}

impl HelloWorldServer {
    pub fn new(config: ServerConfig, instructions: String) -> Self {
        let router = tools::build_router(Self::tool_router);
        Self {
            config: Arc::new(config),
            instructions: Arc::new(instructions),
            tool_router: router,
        }
    }
}

fn run_arithmetic(
    name: &'static str,
    request: ArithmeticRequest,
    operation: fn(i64, i64) -> Result<i64, ArithmeticError>,
) -> Result<Json<ArithmeticResponse>, ErrorData> {
    let span = CallSpan::start("tool", name);
    match span.in_scope(|| operation(request.a, request.b)) {
        Ok(result) => {
            span.finish("ok");
            Ok(Json(ArithmeticResponse { result }))
        }
        Err(err) => {
            span.finish("error");
            Err(tools::overflow_to_error_data(err))
        }
    }
}

#[tool_router(router = tool_router)]
impl HelloWorldServer {
    #[tool(name = "greet", description = "Greet someone by name")]
    async fn greet(&self, Parameters(request): Parameters<GreetRequest>) -> String {
        let span = CallSpan::start("tool", GREET_TOOL_ID);
        let message = span.in_scope(|| tools::greet(&request.name));
        span.finish("ok");
        message
    }

    #[tool(name = "add", description = "Add two integers")]
    async fn add(
        &self,
        Parameters(request): Parameters<ArithmeticRequest>,
    ) -> Result<Json<ArithmeticResponse>, ErrorData> {
        run_arithmetic(ADD_TOOL_ID, request, tools::add)
    }

    #[tool(name = "multiply", description = "Multiply two integers")]
    async fn multiply(
        &self,
        Parameters(request): Parameters<ArithmeticRequest>,
    ) -> Result<Json<ArithmeticResponse>, ErrorData> {
        run_arithmetic(MULTIPLY_TOOL_ID, request, tools::multiply)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HelloWorldServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        };
        info.server_info.name = self.config.server.name.clone();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::static_resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resources::resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let uri = request.uri;
        let route =
            ResourceRoute::resolve(&uri).ok_or_else(|| resources::not_found_error(&uri))?;

        let span = CallSpan::start("resource", route.label());
        let text = span.in_scope(|| route.render(self.config.greeting.clock));
        span.finish("ok");

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri.clone())],
        })
    }
}
