use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{car::CarDto, user::UserDto};

/// Order as returned to clients.
///
/// `car` and `user` are null once the order has been rejected and detached.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub car: Option<CarDto>,
    pub user: Option<UserDto>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Lowercase status name, e.g. `pending`.
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_price: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateOrderStatusDto {
    /// Status name, matched case-insensitively.
    pub status: String,
}
