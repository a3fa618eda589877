//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db)
///     .make("Volvo")
///     .available(false)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    make: String,
    model: String,
    year: i32,
    price_per_day: Decimal,
    available: bool,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - make: `"Make {id}"`, model: `"Model {id}"`
    /// - year: `2020`
    /// - price_per_day: `50`
    /// - available: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            make: format!("Make {}", id),
            model: format!("Model {}", id),
            year: 2020,
            price_per_day: Decimal::new(5000, 2),
            available: true,
        }
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn price_per_day(mut self, price_per_day: Decimal) -> Self {
        self.price_per_day = price_per_day;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            make: ActiveValue::Set(self.make),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            price_per_day: ActiveValue::Set(self.price_per_day),
            available: ActiveValue::Set(self.available),
            current_order_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available car with default values.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
