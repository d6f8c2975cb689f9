//! Tempo MCP server binary: serves the tool set over stdio.

use miette::{IntoDiagnostic, Result};
use rmcp::ServiceExt;
use tempo_mcp::mcp::TempoMcpServer;
use tempo_mcp::tempo::TempoClient;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport; all logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let _ = rustls::crypto::ring::default_provider().install_default();

    tracing::info!("Tempo MCP server starting");

    let client = TempoClient::new()?;
    let server = TempoMcpServer::new(client);

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .into_diagnostic()?;

    service.waiting().await.into_diagnostic()?;

    tracing::info!("Tempo MCP server stopped");
    Ok(())
}
