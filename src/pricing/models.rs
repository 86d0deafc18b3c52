//! Domain models for tour pricing.
//!
//! Requests and results are plain values: built per query, never mutated,
//! never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing policy configured on a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum PricingMethod {
    /// Every person pays the base rate.
    #[default]
    PerPerson,
    /// Room-aware tiered pricing (the "Mayi" model).
    Occupancy,
}

impl PricingMethod {
    /// Parse a method tag coming from tour metadata.
    ///
    /// Unknown tags resolve to `PerPerson` so a misconfigured tour still
    /// gets a price; the tag is logged so it can be fixed upstream.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "per_person" | "perperson" | "per-person" => PricingMethod::PerPerson,
            "occupancy" | "mayi" => PricingMethod::Occupancy,
            other => {
                tracing::warn!(method = %other, "Unknown pricing method, using per_person");
                PricingMethod::PerPerson
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMethod::PerPerson => "per_person",
            PricingMethod::Occupancy => "occupancy",
        }
    }
}

impl From<String> for PricingMethod {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl std::fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule that produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingRule {
    PerPerson,
    /// Tier 1: one person per room, everyone pays the single rate.
    SoloRooms,
    /// Tier 2: a couple sharing one room.
    SharedPair,
    /// Tier 3: two persons in two rooms.
    SplitPair,
    /// Tier 4: three or four persons, rooms not consulted.
    SmallGroup,
    /// Tier 5: five persons in two rooms.
    FiveInTwoRooms,
    /// Tier 6: six or more persons.
    LargeGroup,
    /// No occupancy tier matched.
    Fallback,
}

/// A pricing query assembled from tour metadata and booking-form input.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRequest {
    pub total_adults: i32,
    pub total_children: i32,
    pub rooms: i32,
    /// Price per paying person under shared occupancy
    pub base_price: Decimal,
    /// Price for a person occupying a room alone
    pub single_price: Decimal,
    pub method: PricingMethod,
}

impl PricingRequest {
    /// Adults plus children. Saturates so hostile input cannot overflow
    /// before validation rejects it.
    pub fn total_persons(&self) -> i32 {
        self.total_adults.saturating_add(self.total_children)
    }
}

/// Computed total for a pricing query.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    /// Always carries exactly two fractional digits
    pub total_price: Decimal,
    pub method: PricingMethod,
    pub rule: PricingRule,
    pub total_persons: i32,
}

impl PricingResult {
    /// Total formatted for display and persistence, e.g. `"240.00"`.
    pub fn formatted_total(&self) -> String {
        self.total_price.to_string()
    }
}
