//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes two tools over the stdio transport:
//!
//! - `tempo_query`: run a TraceQL search and return formatted results
//! - `tempo_trace`: fetch a single trace by ID as raw JSON

pub mod server;


pub use server::TempoMcpServer;
