//! Background Tasks Module
//!
//! Contains tasks that run detached from the request that started them.
//!
//! # Tasks
//! - Entry expiry: removes one cached image once its TTL has elapsed

mod expiry;

pub use expiry::spawn_expiry_task;
