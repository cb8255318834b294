use anyhow::Result;
use rmcp::{model::CallToolRequestParam, service::ServiceError};
use serde_json::{json, Map, Value};

use crate::common::{connect_in_process, fixture_config, TestClient};

fn arguments(value: Value) -> Map<String, Value> {
    value.as_object().expect("object").clone()
}

async fn call(client: &TestClient, name: &'static str, args: Value) -> Result<Value, ServiceError> {
    let response = client
        .call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: Some(arguments(args)),
        })
        .await?;
    Ok(serde_json::to_value(response).expect("tool result should serialize"))
}

fn error_code(error: ServiceError) -> Option<String> {
    match error {
        ServiceError::McpError(inner) => inner
            .data
            .as_ref()
            .and_then(|data| data.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

#[tokio::test]
async fn tools_are_listed_with_input_schemas() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let list = client.list_tools(None).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let names: Vec<&str> = list.tools.iter().map(|tool| tool.name.as_ref()).collect();
    assert_eq!(names.len(), 3, "{names:?}");

    for tool in &list.tools {
        let properties = tool
            .input_schema
            .get("properties")
            .and_then(Value::as_object)
            .expect("tool schema should have properties");
        match tool.name.as_ref() {
            "greet" => assert!(properties.contains_key("name")),
            "add" | "multiply" => {
                assert!(properties.contains_key("a"));
                assert!(properties.contains_key("b"));
            }
            other => panic!("unexpected tool {other}"),
        }
    }
    Ok(())
}

#[tokio::test]
async fn greet_returns_text_containing_name() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let response = call(&client, "greet", json!({ "name": "Ferris" })).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let text = response
        .pointer("/content/0/text")
        .and_then(Value::as_str)
        .expect("greet should return text content");
    assert!(text.contains("Ferris"), "text: {text}");
    Ok(())
}

#[tokio::test]
async fn arithmetic_tools_return_structured_results() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let sum = call(&client, "add", json!({ "a": 2, "b": 3 })).await?;
    let negative = call(&client, "add", json!({ "a": -10, "b": 4 })).await?;
    let product = call(&client, "multiply", json!({ "a": 6, "b": 7 })).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(sum.get("structuredContent"), Some(&json!({ "result": 5 })));
    assert_eq!(
        negative.get("structuredContent"),
        Some(&json!({ "result": -6 }))
    );
    assert_eq!(
        product.get("structuredContent"),
        Some(&json!({ "result": 42 }))
    );
    Ok(())
}

#[tokio::test]
async fn overflow_is_reported_as_structured_error() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let add_error = call(&client, "add", json!({ "a": i64::MAX, "b": 1 }))
        .await
        .expect_err("add overflow should fail");
    let mul_error = call(&client, "multiply", json!({ "a": i64::MIN, "b": -1 }))
        .await
        .expect_err("multiply overflow should fail");
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(error_code(add_error).as_deref(), Some("ARITHMETIC_OVERFLOW"));
    assert_eq!(error_code(mul_error).as_deref(), Some("ARITHMETIC_OVERFLOW"));
    Ok(())
}

#[tokio::test]
async fn missing_arguments_are_rejected() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let result = call(&client, "add", json!({ "a": 1 })).await;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert!(
        matches!(result, Err(ServiceError::McpError(_))),
        "missing `b` should be rejected: {result:?}"
    );
    Ok(())
}
