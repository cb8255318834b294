use anyhow::Result;
use rmcp::{model::ReadResourceRequestParam, service::ServiceError};
use serde_json::Value;

use hello_world_mcp::{lib::clock::is_time_of_day, resources::get_server_info};

use crate::common::{connect_in_process, fixture_config, TestClient};

async fn read_text(client: &TestClient, uri: &str) -> Result<String, ServiceError> {
    let response = client
        .read_resource(ReadResourceRequestParam { uri: uri.into() })
        .await?;
    let value = serde_json::to_value(response).expect("resource result should serialize");
    Ok(value
        .pointer("/contents/0/text")
        .and_then(Value::as_str)
        .expect("resource should return text contents")
        .to_string())
}

#[tokio::test]
async fn resources_and_templates_are_listed() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let resources = client.list_resources(None).await?;
    let templates = client.list_resource_templates(None).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let uris: Vec<&str> = resources
        .resources
        .iter()
        .map(|resource| resource.raw.uri.as_str())
        .collect();
    assert_eq!(uris, vec!["info://server"]);

    let template_uris: Vec<&str> = templates
        .resource_templates
        .iter()
        .map(|template| template.raw.uri_template.as_str())
        .collect();
    assert_eq!(template_uris, vec!["greeting://{name}"]);
    Ok(())
}

#[tokio::test]
async fn server_info_resource_is_fixed_text() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let first = read_text(&client, "info://server").await?;
    let second = read_text(&client, "info://server").await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(first, second);
    assert_eq!(first, get_server_info());
    Ok(())
}

#[tokio::test]
async fn greeting_template_includes_name_and_time() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let text = read_text(&client, "greeting://Alice").await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert!(text.starts_with("Hello, Alice!"), "text: {text}");
    let marker = "Current time is ";
    let start = text.find(marker).expect("time marker") + marker.len();
    assert!(is_time_of_day(&text[start..start + 5]), "text: {text}");
    Ok(())
}

#[tokio::test]
async fn unknown_resource_is_not_found() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_config()).await?;
    let unknown = read_text(&client, "info://elsewhere").await;
    let empty_name = read_text(&client, "greeting://").await;
    let _ = client.cancel().await;
    let _ = server_task.await;

    for result in [unknown, empty_name] {
        match result {
            Err(ServiceError::McpError(inner)) => assert_eq!(
                inner
                    .data
                    .as_ref()
                    .and_then(|data| data.get("code"))
                    .and_then(Value::as_str),
                Some("RESOURCE_NOT_FOUND")
            ),
            other => panic!("expected RESOURCE_NOT_FOUND, got {other:?}"),
        }
    }
    Ok(())
}
