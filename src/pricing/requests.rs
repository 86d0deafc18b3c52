//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{PricingMethod, PricingRequest};

/// Request to quote a tour booking.
///
/// Prices accept JSON strings (preferred) or numbers.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub method: PricingMethod,
    pub total_adults: i32,
    #[serde(default)]
    pub total_children: i32,
    #[serde(default = "default_rooms")]
    pub rooms: i32,
    pub base_price: Decimal,
    #[serde(default)]
    pub single_price: Decimal,
}

fn default_rooms() -> i32 {
    1
}

impl From<QuoteRequest> for PricingRequest {
    fn from(req: QuoteRequest) -> Self {
        PricingRequest {
            total_adults: req.total_adults,
            total_children: req.total_children,
            rooms: req.rooms,
            base_price: req.base_price,
            single_price: req.single_price,
            method: req.method,
        }
    }
}
