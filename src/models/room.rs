//! Room model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::RoomType;

/// Room record, as exchanged with clients and stored in `rooms`.
///
/// `id` is unset until the room is first persisted. Create requests must
/// leave it empty; update requests carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct RoomDto {
    #[serde(default)]
    pub id: Option<i64>,
    /// Room number or name shown to staff
    #[validate(length(min = 1, max = 50))]
    pub room_number: String,
    pub room_type: RoomType,
    pub floor: Option<i32>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    /// Set by the server on insert
    #[serde(default)]
    pub crea_date: Option<DateTime<Utc>>,
    /// Set by the server on every save
    #[serde(default)]
    pub modif_date: Option<DateTime<Utc>>,
}

/// Stay parameters for a price quote
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// Length of the stay in days
    pub days: i64,
    /// Number of occupants
    pub people: i64,
}

/// Price of a stay in a given room
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PriceQuote {
    pub room_id: i64,
    pub room_type: RoomType,
    pub number_of_days: i64,
    pub number_of_people: i64,
    #[schema(value_type = String, example = "2700")]
    pub price: Decimal,
}
