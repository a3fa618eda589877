//! Car data repository for database operations.
//!
//! Besides plain CRUD this repository owns the writes that touch the availability
//! flag: an unconditional `set_availability` and the conditional `claim` used while
//! booking.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::car::{Car, CreateCarParam},
};

/// Repository providing database operations for the fleet.
pub struct CarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a car that is available and held by no order.
    pub async fn create(&self, param: CreateCarParam) -> Result<Car, AppError> {
        let entity = entity::car::ActiveModel {
            make: ActiveValue::Set(param.make),
            model: ActiveValue::Set(param.model),
            year: ActiveValue::Set(param.year),
            price_per_day: ActiveValue::Set(param.price_per_day),
            available: ActiveValue::Set(true),
            current_order_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, AppError> {
        let entity = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Returns every car ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Car>, AppError> {
        let entities = entity::prelude::Car::find()
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Returns cars whose availability flag is set, ordered by id.
    pub async fn get_available(&self) -> Result<Vec<Car>, AppError> {
        let entities = entity::prelude::Car::find()
            .filter(entity::car::Column::Available.eq(true))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Deletes a car by id.
    ///
    /// Orders referencing the car keep their rows; the foreign key clears their
    /// `car_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Car deleted
    /// - `Ok(false)` - No car with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the availability flag and returns the stored car.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Car after the update
    /// - `Ok(None)` - No car with that id
    pub async fn set_availability(
        &self,
        id: i32,
        available: bool,
    ) -> Result<Option<Car>, AppError> {
        let Some(entity) = entity::prelude::Car::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if entity.available == available {
            return Ok(Some(Car::from_entity(entity)));
        }

        let mut active: entity::car::ActiveModel = entity.into();
        active.available = ActiveValue::Set(available);
        let entity = active.update(self.db).await?;

        Ok(Some(Car::from_entity(entity)))
    }

    /// Points the car at the order holding it, or clears the reference.
    pub async fn set_current_order(&self, id: i32, order_id: Option<i32>) -> Result<(), AppError> {
        entity::prelude::Car::update_many()
            .col_expr(entity::car::Column::CurrentOrderId, Expr::value(order_id))
            .filter(entity::car::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Flips an available car to unavailable in a single conditional update.
    ///
    /// Of several callers racing for the same car only one sees a row change.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller took the car
    /// - `Ok(false)` - Car missing or already unavailable
    pub async fn claim(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Car::update_many()
            .col_expr(entity::car::Column::Available, Expr::value(false))
            .filter(entity::car::Column::Id.eq(id))
            .filter(entity::car::Column::Available.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
