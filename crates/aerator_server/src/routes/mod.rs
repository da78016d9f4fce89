//! Route modules for the aerator server
//!
//! This module contains endpoint group-specific routers:
//! - compare: Aerator comparison endpoint
//! - health: Health check and readiness endpoints

pub mod compare;
pub mod health;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use aerator_engine::{ComparisonEngine, EngineConfig};

use crate::config::ServerConfig;
use crate::data;
use crate::history::HistoryWriter;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
    /// Comparison engine over the loaded lookup tables
    pub engine: Arc<ComparisonEngine>,
    /// Comparison history log, when configured
    pub history: Option<Arc<HistoryWriter>>,
}

impl AppState {
    /// Build state from configuration, loading the lookup tables.
    pub fn from_config(config: Arc<ServerConfig>) -> anyhow::Result<Self> {
        let (saturation, respiration) = data::load_models(&config)?;
        let engine = ComparisonEngine::new(saturation, respiration, EngineConfig::default());
        let history = config
            .history_path
            .clone()
            .map(|path| Arc::new(HistoryWriter::new(path)));

        Ok(Self {
            config,
            start_time: std::time::Instant::now(),
            engine: Arc::new(engine),
            history,
        })
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(compare::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
