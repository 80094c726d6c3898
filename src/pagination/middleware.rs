//! Pagination middleware
//!
//! Available both as an axum `from_fn` middleware and as a tower layer.

use super::context::{resolve_path, PageContext};
use super::types::PaginationState;
use crate::config::PaginateConfig;
use crate::query::Query;
use axum::extract::{OriginalUri, Request, State};
use axum::http::header::HOST;
use axum::middleware::Next;
use axum::response::Response;
use futures::future::BoxFuture;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Header set by reverse proxies with the client-facing scheme
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Middleware for `axum::middleware::from_fn_with_state`
pub async fn paginate(
    State(config): State<PaginateConfig>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = attach(&config, &mut request);
    let mut response = next.run(request).await;
    response.extensions_mut().insert(context);
    response
}

/// Compute pagination for a request and store it in its extensions
fn attach(config: &PaginateConfig, request: &mut Request) -> PageContext {
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| request.uri().clone(), |original| original.0.clone());

    let query = Query::parse(uri.query().unwrap_or(""));
    let state = PaginationState::from_query(&query, config);

    let protocol = request
        .headers()
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .or_else(|| uri.scheme_str());
    let host = request
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()));
    let original_url = uri.path_and_query().map_or("/", |pq| pq.as_str());

    let path = resolve_path(original_url, protocol, host).unwrap_or_else(|e| {
        tracing::warn!(
            error = %e,
            uri = %uri,
            "Failed to resolve request path, using raw URI path"
        );
        uri.path().to_string()
    });

    tracing::debug!(
        page = state.page,
        limit = state.limit,
        skip = state.skip,
        "Computed pagination"
    );

    let context = PageContext::new(&state, query, path);
    request.extensions_mut().insert(state);
    request.extensions_mut().insert(context.clone());
    context
}

// ============================================================================
// Tower Layer
// ============================================================================

/// Tower layer running the pagination middleware
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginateLayer {
    config: PaginateConfig,
}

impl PaginateLayer {
    /// Create a layer with the given limits
    pub fn new(config: PaginateConfig) -> Self {
        Self { config }
    }
}

impl<S> Layer<S> for PaginateLayer {
    type Service = PaginateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        PaginateService {
            inner,
            config: self.config,
        }
    }
}

/// Service produced by [`PaginateLayer`]
#[derive(Debug, Clone)]
pub struct PaginateService<S> {
    inner: S,
    config: PaginateConfig,
}

impl<S> Service<Request> for PaginateService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        let context = attach(&self.config, &mut request);
        let future = self.inner.call(request);
        Box::pin(async move {
            let mut response = future.await?;
            response.extensions_mut().insert(context);
            Ok(response)
        })
    }
}
