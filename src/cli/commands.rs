//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// paginate-kit CLI
#[derive(Parser, Debug)]
#[command(name = "paginate-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination config file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the demo HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Number of synthetic items served by /items
        #[arg(long, default_value = "250")]
        items: i64,
    },

    /// Show the pagination computed for a URL
    Inspect {
        /// Full request URL (e.g. "http://localhost/items?page=3&limit=20")
        url: String,

        /// Width of the page link window
        #[arg(long, default_value = "3")]
        window: i64,

        /// Total number of pages; enables next-page and window output
        #[arg(long)]
        page_count: Option<i64>,
    },
}
