//! Pricing engine: request validation and strategy dispatch.
//!
//! This is the single entry point every caller goes through, whether it is
//! the booking form rendering a quote or booking creation persisting the
//! authoritative total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculators::{occupancy_total, per_person_total, to_money};
use super::models::{PricingMethod, PricingRequest, PricingResult, PricingRule};

/// Upper bounds on request values.
///
/// Keeps every intermediate product well inside `Decimal` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingLimits {
    pub max_persons: i32,
    pub max_rooms: i32,
    pub max_unit_price: Decimal,
}

impl Default for PricingLimits {
    fn default() -> Self {
        Self {
            max_persons: 500,
            max_rooms: 250,
            max_unit_price: dec!(1000000),
        }
    }
}

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid pricing request: {message}")]
    InvalidRequest { message: String, errors: Vec<String> },
}

impl PricingError {
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidRequest { .. } => "invalid_request",
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            PricingError::InvalidRequest { errors, .. } => errors,
        }
    }
}

/// Stateless pricing engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    limits: PricingLimits,
}

impl PricingEngine {
    pub fn new(limits: PricingLimits) -> Self {
        Self { limits }
    }

    /// Check a request against the domain rules and configured limits.
    ///
    /// Collects every problem instead of stopping at the first.
    pub fn validate(&self, request: &PricingRequest) -> Result<(), PricingError> {
        let mut errors = Vec::new();

        if request.total_adults < 0 {
            errors.push(format!("total_adults must not be negative (got {})", request.total_adults));
        }
        if request.total_children < 0 {
            errors.push(format!(
                "total_children must not be negative (got {})",
                request.total_children
            ));
        }

        let total_persons = request.total_persons();
        if total_persons < 1 {
            errors.push(format!("total persons must be at least 1 (got {})", total_persons));
        } else if total_persons > self.limits.max_persons {
            errors.push(format!(
                "total persons must not exceed {} (got {})",
                self.limits.max_persons, total_persons
            ));
        }

        if request.rooms < 1 {
            errors.push(format!("rooms must be at least 1 (got {})", request.rooms));
        } else if request.rooms > self.limits.max_rooms {
            errors.push(format!(
                "rooms must not exceed {} (got {})",
                self.limits.max_rooms, request.rooms
            ));
        }

        for (field, price) in [
            ("base_price", request.base_price),
            ("single_price", request.single_price),
        ] {
            if price < Decimal::ZERO {
                errors.push(format!("{} must not be negative (got {})", field, price));
            } else if price > self.limits.max_unit_price {
                errors.push(format!(
                    "{} must not exceed {} (got {})",
                    field, self.limits.max_unit_price, price
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(?errors, "Rejected pricing request");
            Err(PricingError::InvalidRequest {
                message: errors.join("; "),
                errors,
            })
        }
    }

    /// Compute the total price for a request.
    ///
    /// Strategies return exact amounts; rounding to cents happens here,
    /// once.
    pub fn compute(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
        self.validate(request)?;

        let total_persons = request.total_persons();
        let (amount, rule) = match request.method {
            PricingMethod::PerPerson => (
                per_person_total(total_persons, request.base_price),
                PricingRule::PerPerson,
            ),
            PricingMethod::Occupancy => occupancy_total(
                total_persons,
                request.rooms,
                request.base_price,
                request.single_price,
            ),
        };

        let total_price = to_money(amount);
        tracing::debug!(
            method = %request.method,
            ?rule,
            total_persons,
            rooms = request.rooms,
            %total_price,
            "Computed tour price"
        );

        Ok(PricingResult {
            total_price,
            method: request.method,
            rule,
            total_persons,
        })
    }

    /// Price a booking from raw collaborator input and return the total as
    /// a two-digit string such as `"240.00"`.
    ///
    /// `method` is the tour's pricing tag; unknown tags price per person.
    pub fn compute_total_price(
        &self,
        method: &str,
        total_adults: i32,
        total_children: i32,
        rooms: i32,
        base_price: Decimal,
        single_price: Decimal,
    ) -> Result<String, PricingError> {
        let request = PricingRequest {
            total_adults,
            total_children,
            rooms,
            base_price,
            single_price,
            method: PricingMethod::from_tag(method),
        };
        self.compute(&request).map(|result| result.formatted_total())
    }
}

/// [`PricingEngine::compute_total_price`] with default limits.
pub fn compute_total_price(
    method: &str,
    total_adults: i32,
    total_children: i32,
    rooms: i32,
    base_price: Decimal,
    single_price: Decimal,
) -> Result<String, PricingError> {
    PricingEngine::default().compute_total_price(
        method,
        total_adults,
        total_children,
        rooms,
        base_price,
        single_price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupancy(persons: i32, rooms: i32, base: Decimal, single: Decimal) -> PricingRequest {
        PricingRequest {
            total_adults: persons,
            total_children: 0,
            rooms,
            base_price: base,
            single_price: single,
            method: PricingMethod::Occupancy,
        }
    }

    fn quote(request: &PricingRequest) -> String {
        PricingEngine::default().compute(request).unwrap().formatted_total()
    }

    // ==================== scenario tests ====================

    #[test]
    fn test_per_person_adults_and_children() {
        let total = compute_total_price("per_person", 2, 1, 1, dec!(100), dec!(0)).unwrap();
        assert_eq!(total, "300.00");
    }

    #[test]
    fn test_occupancy_scenarios() {
        let cases = [
            (1, 1, "80.00"),
            (2, 1, "200.00"),
            (2, 2, "160.00"),
            (4, 2, "200.00"),
            (5, 2, "280.00"),
            (8, 2, "400.00"),
            (10, 2, "560.00"),
        ];
        for (persons, rooms, expected) in cases {
            let request = occupancy(persons, rooms, dec!(100), dec!(80));
            assert_eq!(quote(&request), expected, "persons={} rooms={}", persons, rooms);
        }
    }

    #[test]
    fn test_compute_reports_rule() {
        let engine = PricingEngine::default();
        let result = engine.compute(&occupancy(5, 2, dec!(100), dec!(80))).unwrap();
        assert_eq!(result.rule, PricingRule::FiveInTwoRooms);
        assert_eq!(result.method, PricingMethod::Occupancy);
        assert_eq!(result.total_persons, 5);
        assert_eq!(result.total_price, dec!(280.00));
    }

    #[test]
    fn test_children_count_toward_occupancy() {
        let request = PricingRequest {
            total_adults: 2,
            total_children: 3,
            ..occupancy(0, 2, dec!(100), dec!(80))
        };
        assert_eq!(quote(&request), "280.00");
    }

    #[test]
    fn test_rounding_applied_once() {
        // 3 * 33.335 = 100.005 -> 100.01; rounding the rate first would give 100.02
        let total = compute_total_price("per_person", 3, 0, 1, dec!(33.335), dec!(0)).unwrap();
        assert_eq!(total, "100.01");
    }

    #[test]
    fn test_unknown_method_prices_per_person() {
        let total = compute_total_price("seasonal", 5, 0, 2, dec!(100), dec!(80)).unwrap();
        assert_eq!(total, "500.00");
    }

    // ==================== validation tests ====================

    #[test]
    fn test_rejects_zero_persons() {
        let err = compute_total_price("occupancy", 0, 0, 1, dec!(100), dec!(80)).unwrap_err();
        assert_eq!(err.error_type(), "invalid_request");
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_rejects_zero_rooms() {
        let err = compute_total_price("per_person", 2, 0, 0, dec!(100), dec!(80)).unwrap_err();
        assert!(err.errors().iter().any(|e| e.starts_with("rooms")));
    }

    #[test]
    fn test_rejects_negative_prices() {
        let err = compute_total_price("occupancy", 2, 0, 1, dec!(-1), dec!(-0.01)).unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn test_accepts_free_tour() {
        let total = compute_total_price("occupancy", 2, 0, 1, dec!(0), dec!(0)).unwrap();
        assert_eq!(total, "0.00");
    }

    #[test]
    fn test_rejects_negative_counts() {
        let err = compute_total_price("per_person", 3, -1, 1, dec!(10), dec!(10)).unwrap_err();
        assert!(err.errors().iter().any(|e| e.contains("total_children")));
    }

    #[test]
    fn test_collects_all_errors() {
        let err = compute_total_price("occupancy", 0, 0, 0, dec!(-5), dec!(10)).unwrap_err();
        assert_eq!(err.errors().len(), 3);
    }

    #[test]
    fn test_enforces_limits() {
        let engine = PricingEngine::new(PricingLimits {
            max_persons: 10,
            max_rooms: 3,
            max_unit_price: dec!(500),
        });
        let err = engine
            .compute_total_price("occupancy", 11, 0, 4, dec!(501), dec!(80))
            .unwrap_err();
        assert_eq!(err.errors().len(), 3);

        let ok = engine.compute_total_price("occupancy", 10, 0, 3, dec!(500), dec!(80));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_overflowing_counts_are_rejected() {
        let err = compute_total_price("per_person", i32::MAX, i32::MAX, 1, dec!(1), dec!(1)).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    // ==================== property tests ====================

    fn request_grid() -> Vec<PricingRequest> {
        let prices = [dec!(0), dec!(0.01), dec!(49.995), dec!(100), dec!(80), dec!(1234.56)];
        let mut requests = Vec::new();
        for method in [PricingMethod::PerPerson, PricingMethod::Occupancy] {
            for adults in 0..=8 {
                for children in 0..=4 {
                    if adults + children == 0 {
                        continue;
                    }
                    for rooms in 1..=6 {
                        for base in prices {
                            for single in [dec!(0), dec!(80), dec!(150.5)] {
                                requests.push(PricingRequest {
                                    total_adults: adults,
                                    total_children: children,
                                    rooms,
                                    base_price: base,
                                    single_price: single,
                                    method,
                                });
                            }
                        }
                    }
                }
            }
        }
        requests
    }

    #[test]
    fn test_property_idempotent_and_non_negative() {
        let engine = PricingEngine::default();
        for request in request_grid() {
            let first = engine.compute(&request).unwrap();
            let second = engine.compute(&request).unwrap();
            assert_eq!(first, second);
            assert!(first.total_price >= Decimal::ZERO, "{:?}", request);
            assert_eq!(first.total_price.scale(), 2);
        }
    }

    #[test]
    fn test_property_per_person_monotonic() {
        let engine = PricingEngine::default();
        for request in request_grid()
            .into_iter()
            .filter(|r| r.method == PricingMethod::PerPerson)
        {
            let base = engine.compute(&request).unwrap().total_price;
            let more_adults = PricingRequest {
                total_adults: request.total_adults + 1,
                ..request.clone()
            };
            let more_children = PricingRequest {
                total_children: request.total_children + 1,
                ..request.clone()
            };
            assert!(engine.compute(&more_adults).unwrap().total_price >= base);
            assert!(engine.compute(&more_children).unwrap().total_price >= base);
        }
    }

    #[test]
    fn test_property_five_in_two_rooms_is_exact_min() {
        let engine = PricingEngine::default();
        for base in [dec!(0), dec!(10), dec!(39.99), dec!(40), dec!(100), dec!(333.33)] {
            for single in [dec!(0), dec!(80), dec!(80.005), dec!(200), dec!(250)] {
                let result = engine.compute(&occupancy(5, 2, base, single)).unwrap();
                let expected = (base * dec!(2) + single).min(base * dec!(4));
                assert_eq!(result.total_price, to_money(expected));
            }
        }
    }

    #[test]
    fn test_property_large_group_boundary() {
        let engine = PricingEngine::default();
        for rooms in 1..=5 {
            for persons in 6..=30 {
                if persons == rooms {
                    continue;
                }
                let result = engine.compute(&occupancy(persons, rooms, dec!(100), dec!(80))).unwrap();
                assert_eq!(result.rule, PricingRule::LargeGroup);
                let ceiling = (persons + rooms - 1) / rooms;
                let expected = if ceiling > 4 {
                    dec!(200) * Decimal::from(rooms) + dec!(80) * Decimal::from(persons - rooms * 4)
                } else {
                    dec!(200) * Decimal::from(rooms)
                };
                assert_eq!(result.total_price, expected, "persons={} rooms={}", persons, rooms);
            }
        }
    }
}
