//! Order factory for creating test rental orders.

use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// The factory only inserts the order row, it does not touch the car's
/// availability flag.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    car_id: Option<i32>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_price: Decimal,
    status: String,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - start_date: tomorrow, end_date: three days after start
    /// - total_price: `150`
    /// - status: `"PENDING"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, car_id: i32) -> Self {
        let today = Utc::now().date_naive();
        let start_date = today + Days::new(1);
        Self {
            db,
            user_id: Some(user_id),
            car_id: Some(car_id),
            start_date,
            end_date: start_date + Days::new(3),
            total_price: Decimal::new(15000, 2),
            status: "PENDING".to_string(),
        }
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Inserts the order without car or user references.
    pub fn detached(mut self) -> Self {
        self.user_id = None;
        self.car_id = None;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rental_order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rental_order::Model, DbErr> {
        entity::rental_order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            car_id: ActiveValue::Set(self.car_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order for the given user and car.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    car_id: i32,
) -> Result<entity::rental_order::Model, DbErr> {
    OrderFactory::new(db, user_id, car_id).build().await
}
