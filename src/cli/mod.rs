//! Command-line test client for the Tempo MCP server.
//!
//! Spawns `tempo-mcp-server`, performs the MCP handshake over its
//! stdio, issues a single tool call, and prints the text result.

pub mod error;
pub mod rpc;

#[cfg(test)]
mod rpc_test;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value, json};

use self::error::CliResult;
use self::rpc::McpStdioClient;

#[derive(Parser)]
#[command(name = "tempo-mcp-client")]
#[command(author, version, about = "Test client for the Tempo MCP server", long_about = None)]
pub struct Cli {
    /// Path to the server binary to spawn (default: tempo-mcp-server on PATH)
    #[arg(long, global = true, default_value = "tempo-mcp-server")]
    pub server_bin: String,

    /// Override the Tempo server URL (default: TEMPO_URL env or http://localhost:3200)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Username for basic authentication
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Bearer token for authentication
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a TraceQL query, e.g. query '{duration>1s}'
    Query {
        /// TraceQL query string
        query: String,
        /// Start time: 'now', '-30m', RFC 3339, or YYYY-MM-DD
        #[arg(long, allow_hyphen_values = true)]
        start: Option<String>,
        /// End time, same formats as start
        #[arg(long, allow_hyphen_values = true)]
        end: Option<String>,
        /// Maximum number of traces to return
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Fetch a single trace by ID
    Trace {
        /// Tempo trace ID
        trace_id: String,
        /// Save the JSON trace data to this file instead of printing it
        #[arg(long)]
        filename: Option<String>,
    },
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let (tool, arguments) = match &cli.command {
        Commands::Query {
            query,
            start,
            end,
            limit,
        } => {
            let mut args = connection_arguments(&cli);
            args.insert("query".to_string(), json!(query));
            insert_opt(&mut args, "start", start.as_deref().map(Value::from));
            insert_opt(&mut args, "end", end.as_deref().map(Value::from));
            insert_opt(&mut args, "limit", limit.map(Value::from));
            ("tempo_query", args)
        }
        Commands::Trace { trace_id, filename } => {
            let mut args = connection_arguments(&cli);
            args.insert("trace_id".to_string(), json!(trace_id));
            insert_opt(&mut args, "filename", filename.as_deref().map(Value::from));
            ("tempo_trace", args)
        }
    };

    let mut client = McpStdioClient::spawn(&cli.server_bin).await?;
    client.initialize().await?;
    let text = client.call_tool(tool, Value::Object(arguments)).await?;
    client.shutdown().await;

    println!("{text}");
    Ok(())
}

fn connection_arguments(cli: &Cli) -> Map<String, Value> {
    let mut args = Map::new();
    insert_opt(&mut args, "url", cli.url.as_deref().map(Value::from));
    insert_opt(&mut args, "username", cli.username.as_deref().map(Value::from));
    insert_opt(&mut args, "password", cli.password.as_deref().map(Value::from));
    insert_opt(&mut args, "token", cli.token.as_deref().map(Value::from));
    args
}

fn insert_opt(args: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        args.insert(key.to_string(), value);
    }
}
