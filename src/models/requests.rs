//! Request DTOs for the relay API

use serde::Deserialize;

/// Query string of `GET /Cat`
#[derive(Debug, Clone, Deserialize)]
pub struct CatQuery {
    /// Site to probe, with or without a scheme
    pub url: String,
}
