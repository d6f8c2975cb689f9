use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to spawn MCP server process")]
    #[diagnostic(
        code(tempo_mcp::cli::spawn_failed),
        help(
            "Is tempo-mcp-server on your PATH? Use --server-bin to point at the binary explicitly."
        )
    )]
    SpawnFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("MCP transport error: {message}")]
    #[diagnostic(
        code(tempo_mcp::cli::transport),
        help("The server process may have exited; check its stderr output.")
    )]
    Transport { message: String },

    #[error("Invalid response from MCP server: {message}")]
    #[diagnostic(code(tempo_mcp::cli::invalid_response))]
    InvalidResponse { message: String },

    #[error("MCP error ({code}): {message}")]
    #[diagnostic(code(tempo_mcp::cli::rpc_error))]
    Rpc { code: i32, message: String },
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Transport {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
