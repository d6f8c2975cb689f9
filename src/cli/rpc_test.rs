//! Tests for the JSON-RPC message types and result extraction.

use serde_json::json;

use crate::cli::error::CliError;
use crate::cli::rpc::{JsonRpcRequest, JsonRpcResponse, extract_text_content};

#[test]
fn request_serializes_with_id() {
    let request = JsonRpcRequest::new(7, "tools/call", json!({"name": "tempo_query"}));
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["jsonrpc"], "2.0");
    assert_eq!(value["id"], 7);
    assert_eq!(value["method"], "tools/call");
    assert_eq!(value["params"]["name"], "tempo_query");
}

#[test]
fn notification_omits_id() {
    let notification = JsonRpcRequest::notification("notifications/initialized", json!({}));
    let value = serde_json::to_value(&notification).unwrap();

    assert!(value.get("id").is_none());
    assert_eq!(value["method"], "notifications/initialized");
}

#[test]
fn response_with_result_parses() {
    let response: JsonRpcResponse = serde_json::from_str(
        r#"{"jsonrpc":"2.0","id":1,"result":{"content":[{"type":"text","text":"ok"}]}}"#,
    )
    .unwrap();
    assert_eq!(response.id, Some(json!(1)));
    assert!(response.result.is_some());
    assert!(response.error.is_none());
}

#[test]
fn response_with_error_parses() {
    let response: JsonRpcResponse = serde_json::from_str(
        r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"bad params"}}"#,
    )
    .unwrap();
    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert_eq!(error.message, "bad params");
}

#[test]
fn extract_joins_text_blocks() {
    let result = json!({
        "content": [
            {"type": "text", "text": "line one"},
            {"type": "text", "text": "line two"}
        ]
    });
    assert_eq!(extract_text_content(&result).unwrap(), "line one\nline two");
}

#[test]
fn extract_rejects_missing_content() {
    let err = extract_text_content(&json!({})).unwrap_err();
    assert!(matches!(err, CliError::InvalidResponse { .. }));
}

#[test]
fn extract_surfaces_tool_error_flag() {
    let result = json!({
        "isError": true,
        "content": [{"type": "text", "text": "query execution failed"}]
    });
    let err = extract_text_content(&result).unwrap_err();
    match err {
        CliError::Rpc { message, .. } => assert_eq!(message, "query execution failed"),
        other => panic!("expected Rpc error, got {other:?}"),
    }
}
