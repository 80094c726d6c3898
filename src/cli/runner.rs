//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::PaginateConfig;
use crate::error::Result;
use crate::pagination::{resolve_path, PageContext, PaginationState};
use crate::query::Query;
use serde_json::{json, Value};
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve { port, items } => {
                let server = crate::cli::ServerConfig {
                    paginate: config,
                    items: *items,
                };
                crate::cli::serve(server, *port).await
            }
            Commands::Inspect {
                url,
                window,
                page_count,
            } => {
                let options = InspectOptions {
                    window: *window,
                    page_count: *page_count,
                };
                let output = inspect(url, &config, &options)?;
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(())
            }
        }
    }

    /// Load pagination config, falling back to defaults
    fn load_config(&self) -> Result<PaginateConfig> {
        match &self.cli.config {
            Some(path) => {
                let config = PaginateConfig::from_file(path)?;
                tracing::debug!(path = %path.display(), ?config, "Loaded pagination config");
                Ok(config)
            }
            None => Ok(PaginateConfig::default()),
        }
    }
}

/// Options for [`inspect`]
#[derive(Debug, Clone, Copy)]
pub struct InspectOptions {
    /// Width of the page link window
    pub window: i64,
    /// Total number of pages, if known
    pub page_count: Option<i64>,
}

/// Compute everything the middleware would attach for `url`
pub fn inspect(url: &str, config: &PaginateConfig, options: &InspectOptions) -> Result<Value> {
    let url = Url::parse(url)?;
    let query = Query::parse(url.query().unwrap_or(""));
    let state = PaginationState::from_query(&query, config);

    let original_url = match url.query() {
        Some(search) => format!("{}?{}", url.path(), search),
        None => url.path().to_string(),
    };
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => Some(format!("{host}:{port}")),
        (Some(host), None) => Some(host.to_string()),
        _ => None,
    };
    let path = resolve_path(&original_url, Some(url.scheme()), host.as_deref())?;
    let context = PageContext::new(&state, query, path);

    let mut output = json!({
        "state": state,
        "offset": state.offset(),
        "locals": context,
        "href": context.href(crate::pagination::Href::Current),
        "previous": context.previous_href(),
        "next": context.next_href(),
    });

    if let Some(page_count) = options.page_count {
        output["has_next_pages"] = json!(context.has_next_pages(page_count)?);
        let current = state.page.min(page_count);
        output["pages"] = if current < 1 {
            json!([])
        } else {
            json!(context.get_array_pages(Some(options.window), page_count, Some(current))?)
        };
    }

    Ok(output)
}
