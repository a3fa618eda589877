//! Car domain models and parameters.

use rust_decimal::Decimal;

use crate::model::car::{CarDto, CreateCarDto};

/// Rentable car.
///
/// `available` is the only thing deciding whether the car can be booked.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: Decimal,
    pub available: bool,
    /// Order currently holding the car, if any.
    pub current_order_id: Option<i32>,
}

impl Car {
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            make: self.make,
            model: self.model,
            year: self.year,
            price_per_day: self.price_per_day,
            available: self.available,
            current_order_id: self.current_order_id,
        }
    }

    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            make: entity.make,
            model: entity.model,
            year: entity.year,
            price_per_day: entity.price_per_day,
            available: entity.available,
            current_order_id: entity.current_order_id,
        }
    }
}

/// Parameters for adding a car to the fleet.
#[derive(Debug, Clone)]
pub struct CreateCarParam {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: Decimal,
}

impl From<CreateCarDto> for CreateCarParam {
    fn from(dto: CreateCarDto) -> Self {
        Self {
            make: dto.make,
            model: dto.model,
            year: dto.year,
            price_per_day: dto.price_per_day,
        }
    }
}
