//! Pricing engine module for tour bookings.
//!
//! One shared implementation of the per-person and occupancy ("Mayi")
//! pricing policies, used by the booking form and by booking creation.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{format_money, round_money};
pub use models::{PricingMethod, PricingRequest, PricingResult, PricingRule};
pub use routes::router;
pub use services::{compute_total_price, PricingEngine, PricingError, PricingLimits};
