use super::*;
use std::time::Duration;

use async_trait::async_trait;
use statuswatch_config::MonitorConfig;
use statuswatch_monitor::{
    FetchError, Indicator, LogSink, MonitorEngine, StatusFetcher, StatusSummary,
};
use statuswatch_tools::{register_monitor_tools, ToolDispatcher, ToolRegistry};

use crate::server::ServerInfo;

struct SlowFetcher;

#[async_trait]
impl StatusFetcher for SlowFetcher {
    async fn fetch(&self) -> Result<StatusSummary, FetchError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(StatusSummary {
            indicator: Indicator::None,
            description: "All Systems Operational".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            incident_count: 0,
            maintenance_count: 0,
        })
    }
}

fn transport() -> (StdioTransport, MonitorEngine) {
    let config = MonitorConfig::default();
    let engine = MonitorEngine::new(Arc::new(SlowFetcher), Arc::new(LogSink), &config);
    let registry = Arc::new(ToolRegistry::new());
    register_monitor_tools(&registry, engine.clone(), &config).unwrap();

    let server = McpServer::new(
        ToolDispatcher::new(registry),
        ServerInfo::new("test-server", "0.0.0"),
    );
    (StdioTransport::new(Arc::new(server)), engine)
}

async fn serve(input: &str) -> Vec<serde_json::Value> {
    let (transport, _) = transport();
    let mut output = Vec::new();
    transport.serve(input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn by_id(responses: &[serde_json::Value], id: i64) -> &serde_json::Value {
    responses
        .iter()
        .find(|r| r["id"] == id)
        .unwrap_or_else(|| panic!("no response for id {}", id))
}

#[tokio::test]
async fn test_serve_until_eof() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#, "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#, "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#, "\n",
    );
    let responses = serve(input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(by_id(&responses, 1)["result"]["serverInfo"]["name"], "test-server");
    assert_eq!(
        by_id(&responses, 2)["result"]["tools"].as_array().unwrap().len(),
        3
    );
}

#[tokio::test]
async fn test_malformed_line_gets_parse_error() {
    let input = "{not json\n{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n";
    let responses = serve(input).await;

    assert_eq!(responses.len(), 2);
    let parse_error = responses.iter().find(|r| r["id"].is_null()).unwrap();
    assert_eq!(parse_error["error"]["code"], -32700);
    assert!(by_id(&responses, 1)["result"].is_object());
}

#[tokio::test]
async fn test_invalid_utf8_line_gets_parse_error() {
    let (transport, _) = transport();
    let mut input = b"\xff\xfe garbage\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n");

    let mut output = Vec::new();
    transport.serve(&input[..], &mut output).await.unwrap();

    let responses: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 2);
    let parse_error = responses.iter().find(|r| r["id"].is_null()).unwrap();
    assert_eq!(parse_error["error"]["code"], -32700);
    assert_eq!(by_id(&responses, 1)["result"], serde_json::json!({}));
}

#[tokio::test]
async fn test_request_without_method_is_invalid() {
    let responses = serve("{\"jsonrpc\":\"2.0\",\"id\":4}\n").await;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 4);
    assert_eq!(responses[0]["error"]["code"], -32600);
}

#[tokio::test]
async fn test_blank_lines_ignored() {
    let responses = serve("\n   \n").await;
    assert!(responses.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_slow_check_does_not_block_stop() {
    let (transport, engine) = transport();
    engine.start(Duration::from_secs(60));

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"check_github_status"}}"#, "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"stop_monitoring","arguments":{}}}"#, "\n",
    );
    let mut output = Vec::new();
    transport.serve(input.as_bytes(), &mut output).await.unwrap();

    let responses: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 2);
    assert_eq!(
        responses[0]["result"]["content"][0]["text"],
        "Stopped GitHub status monitoring"
    );
    assert_eq!(responses[1]["id"], 1);
    assert!(!engine.is_running());
}

#[test]
fn test_transport_error_display() {
    let err = TransportError::Task("panicked".to_string());
    assert_eq!(err.to_string(), "Request task failed: panicked");

    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
    let err: TransportError = io_err.into();
    assert!(err.to_string().contains("IO error"));
}
