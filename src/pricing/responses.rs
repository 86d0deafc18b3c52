//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{PricingMethod, PricingResult, PricingRule};
use super::services::PricingError;

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    pub method: PricingMethod,
    pub rule: PricingRule,
    pub total_persons: i32,
}

impl From<PricingResult> for QuoteResponse {
    fn from(result: PricingResult) -> Self {
        QuoteResponse {
            total_price: result.total_price,
            method: result.method,
            rule: result.rule,
            total_persons: result.total_persons,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&PricingError> for PricingErrorResponse {
    fn from(err: &PricingError) -> Self {
        PricingErrorResponse {
            error_type: err.error_type().to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "errors": err.errors() })),
        }
    }
}

/// Response for the health probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
