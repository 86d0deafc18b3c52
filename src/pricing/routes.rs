//! Pricing API route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::models::PricingRequest;
use super::requests::QuoteRequest;
use super::responses::QuoteResponse;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(quote))
}

/// Quote a booking
pub async fn quote(
    State(state): State<AppState>,
    Json(body): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let request = PricingRequest::from(body);
    let result = state.engine.compute(&request)?;
    Ok(Json(result.into()))
}
