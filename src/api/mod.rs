//! API Module
//!
//! HTTP handlers and routing for the relay.
//!
//! # Endpoints
//! - `GET /Cat?url=<site>` - Cat picture for the site's status code
//! - `GET /stats` - Image cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
