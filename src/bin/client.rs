//! Test client binary: spawns the server and runs one tool call.

use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tempo_mcp::cli::run().await?;
    Ok(())
}
