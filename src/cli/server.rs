//! HTTP server for the demo `/items` endpoint

use crate::config::PaginateConfig;
use crate::error::{Error, Result};
use crate::pagination::{PageContext, PageLink, PaginateLayer, PaginationState};
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Limits applied by the pagination middleware
    pub paginate: PaginateConfig,
    /// Number of synthetic items behind `/items`
    pub items: i64,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

/// One synthetic item
#[derive(Debug, Serialize)]
struct Item {
    id: i64,
    name: String,
}

/// Body of `GET /items`
#[derive(Debug, Serialize)]
struct ItemsPage {
    items: Vec<Item>,
    page: i64,
    limit: i64,
    skip: i64,
    total: i64,
    page_count: i64,
    has_previous_pages: bool,
    has_next_pages: bool,
    previous: Option<String>,
    next: Option<String>,
    pages: Vec<PageLink>,
}

/// Build the demo router
pub fn router(config: ServerConfig) -> Router {
    let paginate = PaginateLayer::new(config.paginate);
    let state = AppState { config };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/items", get(list_items))
        .layer(paginate)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List synthetic items for the requested page
async fn list_items(
    State(state): State<Arc<AppState>>,
    pagination: PaginationState,
    pages: PageContext,
) -> Result<Json<ApiResponse<ItemsPage>>> {
    let total = state.config.items.max(0);
    let page_count = if pagination.limit > 0 {
        total / pagination.limit + i64::from(total % pagination.limit != 0)
    } else {
        0
    };

    let first = pagination.skip.saturating_add(1);
    let last = pagination.skip.saturating_add(pagination.limit).min(total);
    let items = (first..=last)
        .map(|id| Item {
            id,
            name: format!("item-{id}"),
        })
        .collect();

    let has_next_pages = pages.has_next_pages(page_count)?;
    let window = if (1..=page_count).contains(&pagination.page) {
        pages.get_array_pages(None, page_count, Some(pagination.page))?
    } else {
        Vec::new()
    };

    Ok(Json(ApiResponse::success(ItemsPage {
        items,
        page: pagination.page,
        limit: pagination.limit,
        skip: pagination.skip,
        total,
        page_count,
        has_previous_pages: pages.has_previous_pages,
        has_next_pages,
        previous: pages.has_previous_pages.then(|| pages.previous_href()),
        next: has_next_pages.then(|| pages.next_href()),
        pages: window,
    })))
}
