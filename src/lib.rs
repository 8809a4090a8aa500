//! Fixed-window rate limiting for the sensasiwangi.id backend.
//!
//! The core is [`FixedWindowLimiter`]: per-key request counts in
//! non-overlapping windows, N requests per window, deny past the threshold.
//! The rest of the crate is the service wrapper - an axum front exposing the
//! limiter as a decision endpoint, guarded per client IP, with prometheus
//! metrics and a background sweep of expired records.

pub mod config;
pub mod handlers;
pub mod limiter;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod state;
pub mod sweeper;

pub use limiter::{FixedWindowLimiter, LimiterConfig, WindowEntry};
