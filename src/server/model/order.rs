//! Order domain models, the order status state set and creation parameters.
//!
//! Orders start `PENDING`. `COMPLETED` and `REJECTED` are terminal and give the car
//! back to the fleet, but no transition between statuses is refused: any known status
//! may follow any other.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    model::order::{CreateOrderDto, OrderDto},
    server::{
        error::AppError,
        model::{car::Car, user::User},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Active,
    Completed,
    Rejected,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        Self::Pending,
        Self::Paid,
        Self::Active,
        Self::Completed,
        Self::Rejected,
    ];

    /// Statuses in which the order still holds its car.
    pub const OPEN: [OrderStatus; 3] = [Self::Pending, Self::Paid, Self::Active];

    /// Stored form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Matches a status name ignoring ASCII case.
    ///
    /// Surrounding whitespace is not stripped, so `" paid"` is not a status.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }
}

/// Booking of one car by one user.
///
/// `user` and `car` are `None` once the order has been rejected and detached; the
/// remaining fields are kept as an audit record.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user: Option<User>,
    pub car: Option<Car>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Drops the user and car references while keeping id, dates, price, status and
    /// creation time.
    pub fn detach(self) -> Self {
        Self {
            user: None,
            car: None,
            ..self
        }
    }

    #[cfg(test)]
    pub fn is_detached(&self) -> bool {
        self.user.is_none() && self.car.is_none()
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            car: self.car.map(Car::into_dto),
            user: self.user.map(User::into_dto),
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.as_str().to_lowercase(),
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }

    /// Converts an order row and its related rows to a domain model.
    ///
    /// # Arguments
    /// - `entity` - Order row
    /// - `user` - Row referenced by `user_id`, if any
    /// - `car` - Row referenced by `car_id`, if any
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(AppError::InternalError)` - Stored status or user role is unknown
    pub fn from_entity(
        entity: entity::rental_order::Model,
        user: Option<entity::user::Model>,
        car: Option<entity::car::Model>,
    ) -> Result<Self, AppError> {
        let status = OrderStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Order {} has unknown status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user: user.map(User::from_entity).transpose()?,
            car: car.map(Car::from_entity),
            start_date: entity.start_date,
            end_date: entity.end_date,
            total_price: entity.total_price,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Booking request as received from the client.
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
}

impl From<CreateOrderDto> for CreateOrderParam {
    fn from(dto: CreateOrderDto) -> Self {
        Self {
            car_id: dto.car_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            total_price: dto.total_price,
        }
    }
}
