//! API Handlers
//!
//! HTTP request handlers for each relay endpoint.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::warn;

use crate::cache::ImageCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{CatQuery, HealthResponse, StatsResponse};
use crate::probe::StatusProbe;

/// Application state shared across all handlers.
///
/// One cache per running server; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Status-code image cache
    pub cache: ImageCache,
    /// Outbound probe and image fetcher
    pub probe: StatusProbe,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: ImageCache, probe: StatusProbe) -> Self {
        Self { cache, probe }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ImageCache::new(config.cache_ttl());
        let probe = StatusProbe::from_config(config)?;
        Ok(Self::new(cache, probe))
    }
}

/// Handler for GET /Cat?url=...
///
/// Probes the target and answers with the cat picture for its status code.
pub async fn cat_handler(
    State(state): State<AppState>,
    Query(query): Query<CatQuery>,
) -> Result<impl IntoResponse> {
    let (_, image) = state
        .probe
        .resolve(&state.cache, &query.url)
        .await
        .inspect_err(|err| warn!(url = %query.url, error = %err, "cat request failed"))?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], image))
}

/// Handler for GET /stats
///
/// Returns current image cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
