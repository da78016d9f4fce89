//! REST API server for the AeraSync aerator comparison engine
//!
//! This crate exposes the comparison engine over HTTP: health and readiness
//! probes, the `/api/v1/compare` endpoint, TOML/env/CLI configuration, and
//! an append-only comparison history log.

pub mod config;
pub mod data;
pub mod history;
pub mod routes;
pub mod server;

// Re-export engine dependencies for integration
pub use aerator_engine;
pub use aerator_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
