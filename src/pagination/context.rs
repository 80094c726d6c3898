//! Request-scoped view helpers
//!
//! `PageContext` is the per-request object handed to handlers and templates.
//! It owns a snapshot of the request query so building links never touches
//! the request itself.

use super::types::{parse_int_or, PageLink, PaginationState};
use crate::error::{Error, Result};
use crate::query::Query;
use serde::Serialize;
use url::Url;

/// Window width used by [`PageContext::get_array_pages`] when none is given
pub const DEFAULT_WINDOW: i64 = 3;

/// Which link [`PageContext::href`] should build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Href {
    /// The current query, re-encoded
    Current,
    /// Overwrite keys of the current query; `page` is left alone unless given
    Merge(Query),
    /// Step one page back (`previous`) or forward, then apply `params`
    Step {
        previous: bool,
        params: Option<Query>,
    },
}

/// Pagination helpers bound to one request
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Current page, 1-based
    pub page: i64,
    /// Items per page
    pub limit: i64,
    /// `page > 1`
    pub has_previous_pages: bool,
    #[serde(skip)]
    query: Query,
    #[serde(skip)]
    path: String,
}

impl PageContext {
    /// Create a context from the computed state, the request query and path
    pub fn new(state: &PaginationState, query: Query, path: impl Into<String>) -> Self {
        Self {
            page: state.page,
            limit: state.limit,
            has_previous_pages: state.has_previous_pages(),
            query,
            path: path.into(),
        }
    }

    /// The request query this context was built from
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The request path links are built on
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Build a path-plus-query link relative to the current request
    pub fn href(&self, target: Href) -> String {
        let mut query = self.query.clone();

        match target {
            Href::Current => {}
            Href::Merge(params) => query.merge(&params),
            Href::Step { previous, params } => {
                let page = parse_int_or(query.get_str("page"), 1);
                let page = if previous {
                    page.saturating_sub(1)
                } else {
                    page.saturating_add(1)
                };
                query.insert("page", page.max(1));
                if let Some(params) = params {
                    query.merge(&params);
                }
            }
        }

        let search = query.to_query_string();
        if search.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, search)
        }
    }

    /// Link with `params` merged onto the current query
    pub fn href_with(&self, params: &Query) -> String {
        self.href(Href::Merge(params.clone()))
    }

    /// Link to the previous page (never below page 1)
    pub fn previous_href(&self) -> String {
        self.href(Href::Step {
            previous: true,
            params: None,
        })
    }

    /// Link to the next page
    pub fn next_href(&self) -> String {
        self.href(Href::Step {
            previous: false,
            params: None,
        })
    }

    /// Link to an explicit page number
    pub fn page_href(&self, page: i64) -> String {
        self.href(Href::Step {
            previous: false,
            params: Some(Query::new().with("page", page)),
        })
    }

    /// Whether pages exist after the current one
    ///
    /// Compares the clamped current page, so a missing or malformed `page`
    /// query value counts as page 1.
    pub fn has_next_pages(&self, page_count: i64) -> Result<bool> {
        if page_count < 0 {
            return Err(Error::invalid_argument("pageCount", "is not a number >= 0"));
        }
        Ok(self.page < page_count)
    }

    /// Page links centred on `current_page`
    ///
    /// `limit` is the window width (default [`DEFAULT_WINDOW`]); the window
    /// spans `limit / 2` pages on each side and is cut at `1` and
    /// `page_count`. `current_page` defaults to 1 and must lie in
    /// `[1, page_count]`.
    pub fn get_array_pages(
        &self,
        limit: Option<i64>,
        page_count: i64,
        current_page: Option<i64>,
    ) -> Result<Vec<PageLink>> {
        let limit = limit.unwrap_or(DEFAULT_WINDOW);
        if limit < 0 {
            return Err(Error::invalid_argument("limit", "is not a number >= 0"));
        }
        if page_count < 0 {
            return Err(Error::invalid_argument("pageCount", "is not a number >= 0"));
        }

        let current_page = current_page.unwrap_or(1);
        if current_page < 1 || current_page > page_count {
            return Err(Error::invalid_argument(
                "currentPage",
                "is not within valid range",
            ));
        }

        let half = limit / 2;
        let start = current_page.saturating_sub(half).max(1);
        let end = current_page.saturating_add(half).min(page_count);

        Ok((start..=end)
            .map(|number| PageLink {
                number,
                url: self.page_href(number),
            })
            .collect())
    }
}

/// Resolve the path of `original_url` against `{protocol}://{host}`
///
/// Missing protocol means `http`, missing host means `localhost`. The
/// result is normalised by the URL parser (dot segments removed,
/// percent-encoding applied).
pub fn resolve_path(
    original_url: &str,
    protocol: Option<&str>,
    host: Option<&str>,
) -> Result<String> {
    let protocol = protocol.filter(|p| !p.is_empty()).unwrap_or("http");
    let host = host.filter(|h| !h.is_empty()).unwrap_or("localhost");
    let base = Url::parse(&format!("{protocol}://{host}"))?;
    let url = base.join(original_url)?;
    Ok(url.path().to_string())
}
