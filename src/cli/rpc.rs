//! Minimal JSON-RPC 2.0 client over a child process's stdio.
//!
//! Speaks just enough MCP to initialize a session and call one tool,
//! which is all the test client needs.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use super::error::{CliError, CliResult};

const PROTOCOL_VERSION: &str = "2025-03-26";

/// JSON-RPC 2.0 request or notification (no `id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: i64, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(Value::from(id)),
            method: method.into(),
            params: Some(params),
        }
    }

    pub fn notification(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: method.into(),
            params: Some(params),
        }
    }
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// MCP client talking line-delimited JSON-RPC to a spawned server.
pub struct McpStdioClient {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    next_id: i64,
}

impl McpStdioClient {
    /// Spawn the server binary with piped stdio. The server's stderr is
    /// inherited so its logs stay visible.
    pub async fn spawn(server_bin: &str) -> CliResult<Self> {
        let mut child = Command::new(server_bin)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|source| CliError::SpawnFailed { source })?;

        let stdin = child.stdin.take().ok_or_else(|| CliError::Transport {
            message: "server stdin unavailable".to_string(),
        })?;
        let stdout = child.stdout.take().ok_or_else(|| CliError::Transport {
            message: "server stdout unavailable".to_string(),
        })?;

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            next_id: 1,
        })
    }

    /// Perform the MCP initialize handshake.
    pub async fn initialize(&mut self) -> CliResult<()> {
        let params = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {},
            "clientInfo": {
                "name": "tempo-mcp-client",
                "version": env!("CARGO_PKG_VERSION"),
            },
        });
        self.request("initialize", params).await?;
        self.send(&JsonRpcRequest::notification(
            "notifications/initialized",
            json!({}),
        ))
        .await?;
        Ok(())
    }

    /// Call a tool and return its concatenated text content.
    pub async fn call_tool(&mut self, name: &str, arguments: Value) -> CliResult<String> {
        let result = self
            .request("tools/call", json!({"name": name, "arguments": arguments}))
            .await?;
        extract_text_content(&result)
    }

    /// Close the server's stdin and reap the process.
    pub async fn shutdown(mut self) {
        drop(self.stdin);
        let _ = self.child.wait().await;
    }

    async fn request(&mut self, method: &str, params: Value) -> CliResult<Value> {
        let id = self.next_id;
        self.next_id += 1;

        self.send(&JsonRpcRequest::new(id, method, params)).await?;
        self.read_response(id).await
    }

    async fn send(&mut self, message: &JsonRpcRequest) -> CliResult<()> {
        let mut line = serde_json::to_string(message)?;
        line.push('\n');
        self.stdin.write_all(line.as_bytes()).await?;
        self.stdin.flush().await?;
        Ok(())
    }

    /// Read messages until the response with the matching id arrives.
    /// Server-initiated notifications are skipped.
    async fn read_response(&mut self, id: i64) -> CliResult<Value> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self.stdout.read_line(&mut line).await?;
            if read == 0 {
                return Err(CliError::Transport {
                    message: "server closed its stdout before responding".to_string(),
                });
            }
            if line.trim().is_empty() {
                continue;
            }

            let response: JsonRpcResponse = match serde_json::from_str(line.trim()) {
                Ok(r) => r,
                // Not a response (e.g. a server-side request); skip it.
                Err(_) => continue,
            };

            if response.id != Some(Value::from(id)) {
                continue;
            }

            if let Some(error) = response.error {
                return Err(CliError::Rpc {
                    code: error.code,
                    message: error.message,
                });
            }

            return response.result.ok_or_else(|| CliError::InvalidResponse {
                message: "response carried neither result nor error".to_string(),
            });
        }
    }
}

/// Pull the text blocks out of a `tools/call` result.
pub fn extract_text_content(result: &Value) -> CliResult<String> {
    let content = result
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| CliError::InvalidResponse {
            message: "tool result has no content array".to_string(),
        })?;

    let text: Vec<&str> = content
        .iter()
        .filter_map(|block| block.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(CliError::InvalidResponse {
            message: "tool result contained no text content".to_string(),
        });
    }

    let joined = text.join("\n");
    if result.get("isError").and_then(Value::as_bool) == Some(true) {
        return Err(CliError::Rpc {
            code: -32603,
            message: joined,
        });
    }

    Ok(joined)
}
