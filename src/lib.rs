//! Tour pricing service.
//!
//! Exposes the group-occupancy pricing engine in-process
//! ([`pricing::compute_total_price`]) and over HTTP ([`app`]).

pub mod config;
pub mod error;
pub mod pricing;

use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::pricing::responses::HealthResponse;
use crate::pricing::PricingEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: PricingEngine,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/pricing", pricing::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
