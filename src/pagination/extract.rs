//! Extractors for values stored by the middleware

use super::context::PageContext;
use super::types::PaginationState;
use crate::error::Error;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

#[async_trait]
impl<S> FromRequestParts<S> for PaginationState
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<PaginationState>()
            .copied()
            .ok_or(Error::MissingMiddleware {
                extension: "PaginationState",
            })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<PageContext>()
            .cloned()
            .ok_or(Error::MissingMiddleware {
                extension: "PageContext",
            })
    }
}
