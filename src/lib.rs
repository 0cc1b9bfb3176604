pub mod config;
pub mod controllers;
pub mod error;
pub mod library;
pub mod middleware;
pub mod models;
pub mod ticketing;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

// Shared state for the whole application
#[derive(Debug)]
pub struct AppState {
    pub ticketing: ticketing::TicketingService,
    pub library: library::BookRegistry,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            ticketing: ticketing::TicketingService::new(config.ticketing.seat_count),
            library: library::BookRegistry::with_sample_book(),
            config,
        })
    }
}

/// Assembles the full router: unauthenticated probes at the root, the
/// authenticated service surface under `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Train Ticketing API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
