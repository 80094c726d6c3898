//! CLI module
//!
//! Command-line interface for the demo server and pagination inspection.
//!
//! # Commands
//!
//! - `serve` - Start a demo HTTP server with a paginated `/items` endpoint
//! - `inspect` - Print the pagination computed for a URL

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::{inspect, InspectOptions, Runner};
pub use server::{router, serve, ServerConfig};
