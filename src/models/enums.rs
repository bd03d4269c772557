//! Shared domain enums

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// Room category, which also selects the pricing formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "room_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    /// Air-conditioned room
    Ac,
    /// Room without air conditioning
    NonAc,
}

/// Daily rate of an air-conditioned room, whatever the occupancy
const AC_DAILY_RATE: i64 = 900;
/// Daily rate of a non-AC room with a single occupant
const NON_AC_SINGLE_DAILY_RATE: i64 = 350;
/// Daily rate of a non-AC room for any other occupancy
const NON_AC_SHARED_DAILY_RATE: i64 = 40;

impl RoomType {
    /// Price of a stay of `number_of_days` for `number_of_people` occupants.
    ///
    /// Inputs are not range-checked: zero days cost nothing and negative
    /// counts produce negative amounts.
    pub fn price(self, number_of_days: i64, number_of_people: i64) -> Decimal {
        let rate = match self {
            RoomType::Ac => AC_DAILY_RATE,
            RoomType::NonAc if number_of_people == 1 => NON_AC_SINGLE_DAILY_RATE,
            RoomType::NonAc => NON_AC_SHARED_DAILY_RATE,
        };
        Decimal::from(rate) * Decimal::from(number_of_days)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Ac => "AC",
            RoomType::NonAc => "NON_AC",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
