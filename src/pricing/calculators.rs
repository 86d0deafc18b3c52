//! Core pricing calculation functions.
//!
//! Pure functions for pricing math. Nothing here rounds: callers get the
//! exact amount and round once via [`to_money`] at the output boundary.
//! Inputs are assumed validated (`persons >= 1`, `rooms >= 1`, prices >= 0).

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::pricing::models::PricingRule;

/// Persons a single room holds before extra occupants pay the single rate.
pub const ROOM_CAPACITY: i32 = 4;

/// Occupants per room that pay the shared rate.
pub const SHARED_PAYERS_PER_ROOM: i32 = 2;

/// Round to specified decimal places, midpoints away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tour_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
/// assert_eq!(round_money(dec!(1.235), 2), dec!(1.24));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to cents and pin the scale at two digits, so `300` becomes `300.00`.
pub fn to_money(amount: Decimal) -> Decimal {
    let mut rounded = round_money(amount, 2);
    rounded.rescale(2);
    rounded
}

/// Format an amount as a two-digit money string.
pub fn format_money(amount: Decimal) -> String {
    to_money(amount).to_string()
}

/// Flat per-person total.
pub fn per_person_total(total_persons: i32, base_price: Decimal) -> Decimal {
    Decimal::from(total_persons) * base_price
}

/// Guarded rules of the occupancy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyTier {
    SoloRooms,
    SharedPair,
    SplitPair,
    SmallGroup,
    FiveInTwoRooms,
    LargeGroup,
}

/// Tiers in precedence order. The first one that applies wins; when none
/// does, [`occupancy_total`] charges the base rate per person.
pub const OCCUPANCY_TIERS: [OccupancyTier; 6] = [
    OccupancyTier::SoloRooms,
    OccupancyTier::SharedPair,
    OccupancyTier::SplitPair,
    OccupancyTier::SmallGroup,
    OccupancyTier::FiveInTwoRooms,
    OccupancyTier::LargeGroup,
];

impl OccupancyTier {
    pub fn applies(self, persons: i32, rooms: i32) -> bool {
        match self {
            OccupancyTier::SoloRooms => persons == rooms,
            OccupancyTier::SharedPair => persons == 2 && rooms == 1,
            OccupancyTier::SplitPair => persons == 2 && rooms == 2,
            OccupancyTier::SmallGroup => (3..=4).contains(&persons),
            OccupancyTier::FiveInTwoRooms => persons == 5 && rooms == 2,
            OccupancyTier::LargeGroup => persons >= 6,
        }
    }

    pub fn price(self, persons: i32, rooms: i32, base_price: Decimal, single_price: Decimal) -> Decimal {
        match self {
            OccupancyTier::SoloRooms => single_price * Decimal::from(persons),
            OccupancyTier::SharedPair | OccupancyTier::SmallGroup => base_price * shared_payers(),
            OccupancyTier::SplitPair => single_price * shared_payers(),
            OccupancyTier::FiveInTwoRooms => {
                // Compared unrounded
                let pair_plus_single = base_price * shared_payers() + single_price;
                let two_pairs = base_price * Decimal::from(4);
                pair_plus_single.min(two_pairs)
            }
            OccupancyTier::LargeGroup => large_group_total(persons, rooms, base_price, single_price),
        }
    }

    pub fn rule(self) -> PricingRule {
        match self {
            OccupancyTier::SoloRooms => PricingRule::SoloRooms,
            OccupancyTier::SharedPair => PricingRule::SharedPair,
            OccupancyTier::SplitPair => PricingRule::SplitPair,
            OccupancyTier::SmallGroup => PricingRule::SmallGroup,
            OccupancyTier::FiveInTwoRooms => PricingRule::FiveInTwoRooms,
            OccupancyTier::LargeGroup => PricingRule::LargeGroup,
        }
    }
}

fn shared_payers() -> Decimal {
    Decimal::from(SHARED_PAYERS_PER_ROOM)
}

/// Persons per room, rounded up.
pub fn persons_per_room(persons: i32, rooms: i32) -> i32 {
    (persons + rooms - 1) / rooms
}

/// Tier 6: six or more persons.
///
/// While no room exceeds [`ROOM_CAPACITY`], each room's first two occupants
/// pay the shared rate and the rest ride free. Past capacity, every person
/// beyond `rooms * ROOM_CAPACITY` pays the single rate on top.
pub fn large_group_total(persons: i32, rooms: i32, base_price: Decimal, single_price: Decimal) -> Decimal {
    if persons_per_room(persons, rooms) <= ROOM_CAPACITY {
        if rooms == 1 {
            base_price * shared_payers()
        } else {
            base_price * shared_payers() * Decimal::from(rooms)
        }
    } else {
        let extra_persons = persons - rooms * ROOM_CAPACITY;
        let base_cost = base_price * shared_payers() * Decimal::from(rooms);
        let extra_cost = Decimal::from(extra_persons) * single_price;
        base_cost + extra_cost
    }
}

/// Evaluate the occupancy table and report which rule fired.
pub fn occupancy_total(
    persons: i32,
    rooms: i32,
    base_price: Decimal,
    single_price: Decimal,
) -> (Decimal, PricingRule) {
    match OCCUPANCY_TIERS.iter().find(|tier| tier.applies(persons, rooms)) {
        Some(tier) => (tier.price(persons, rooms, base_price, single_price), tier.rule()),
        None => (per_person_total(persons, base_price), PricingRule::Fallback),
    }
}
