//! Pagination module
//!
//! Derives `page`, `limit` and `skip` from the request query and exposes
//! request-scoped link helpers for handlers and templates.
//!
//! # Overview
//!
//! The middleware runs once per request. It never rejects: malformed
//! `page`/`limit` values are coerced to defaults. It stores two request
//! extensions:
//!
//! - [`PaginationState`]: `page`, `limit`, `skip` (a.k.a. offset) for the
//!   data layer
//! - [`PageContext`]: the view-side helpers (`href`, `has_next_pages`,
//!   `get_array_pages`) bound to the current request
//!
//! The same [`PageContext`] is attached to the response extensions once the
//! handler has run.
//!
//! ```rust,ignore
//! use axum::{middleware, routing::get, Router};
//! use paginate_kit::{pagination, PaginateConfig};
//!
//! let app = Router::new()
//!     .route("/items", get(list_items))
//!     .layer(middleware::from_fn_with_state(
//!         PaginateConfig::new(Some(20), Some(100)),
//!         pagination::paginate,
//!     ));
//! ```

mod context;
mod extract;
mod middleware;
mod types;

pub use context::{resolve_path, Href, PageContext, DEFAULT_WINDOW};
pub use middleware::{paginate, PaginateLayer, PaginateService};
pub use types::{parse_int_or, PageLink, PaginationState};
