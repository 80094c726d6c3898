// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # paginate-kit
//!
//! Pagination middleware and view helpers for axum.
//!
//! ## Features
//!
//! - **Request pagination**: `page`, `limit` and `skip`/`offset` computed from
//!   the query string, with `limit` clamped to configured bounds
//! - **Never rejects**: malformed values fall back to page 1 and the default limit
//! - **Link building**: previous/next/explicit-page links that keep every
//!   other query parameter (sorting, filters) intact
//! - **Page windows**: numbered page links around the current page for
//!   navigation bars
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum::{routing::get, Json, Router};
//! use paginate_kit::{PageContext, PaginateConfig, PaginateLayer, PaginationState};
//!
//! async fn list(state: PaginationState, pages: PageContext) -> Json<serde_json::Value> {
//!     let items = db.fetch(state.skip, state.limit).await;
//!     let page_count = (total + state.limit - 1) / state.limit;
//!     Json(serde_json::json!({
//!         "items": items,
//!         "next": pages.has_next_pages(page_count)?.then(|| pages.next_href()),
//!         "pages": pages.get_array_pages(None, page_count, Some(state.page))?,
//!     }))
//! }
//!
//! let app = Router::new()
//!     .route("/items", get(list))
//!     .layer(PaginateLayer::new(PaginateConfig::new(Some(20), Some(100))));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Pagination Middleware                     │
//! │  query → PaginationState { page, limit, skip }                │
//! │        → PageContext { href, has_next_pages, get_array_pages }│
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//!        ┌───────────────┬───────┴───────┬────────────────┐
//!        │     Query     │    Config     │      CLI       │
//!        ├───────────────┼───────────────┼────────────────┤
//!        │ ordered map   │ limit bounds  │ serve (demo)   │
//!        │ qs codec      │ YAML loading  │ inspect        │
//!        └───────────────┴───────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Ordered query mapping and codec
pub mod query;

/// Middleware configuration
pub mod config;

/// Pagination state, helpers and middleware
pub mod pagination;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PaginateConfig;
pub use error::{Error, Result};
pub use pagination::{
    paginate, Href, PageContext, PageLink, PaginateLayer, PaginationState,
};
pub use query::{Query, QueryValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
