//! Probe Module
//!
//! Resolves a user-supplied URL to a status code and that status code to an image.

mod client;
mod target;

pub use client::StatusProbe;
pub use target::normalize_target;
