//! Request and Response models for the relay API
//!
//! Query parameters and the JSON bodies of the auxiliary endpoints.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::CatQuery;
pub use responses::{HealthResponse, StatsResponse};
