//! Cat Relay - status-code cat pictures for any site
//!
//! Probes a site, then answers with a cached image for the status code it
//! returned. Images expire from the cache after a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod probe;
pub mod tasks;

pub use api::AppState;
pub use cache::ImageCache;
pub use config::Config;
pub use error::RelayError;
