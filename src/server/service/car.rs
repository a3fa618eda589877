//! Car service: fleet queries and the only place availability is changed.
//!
//! Generic over `ConnectionTrait` so the order service can drive availability changes
//! inside its own transaction.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::car::CarRepository,
    error::AppError,
    model::car::{Car, CreateCarParam},
};

pub struct CarService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Car>, AppError> {
        CarRepository::new(self.db).get_all().await
    }

    /// Cars that can currently be booked.
    pub async fn list_available(&self) -> Result<Vec<Car>, AppError> {
        CarRepository::new(self.db).get_available().await
    }

    /// # Returns
    /// - `Ok(Car)` - The car
    /// - `Err(AppError::NotFound)` - No car with that id
    pub async fn get(&self, id: i32) -> Result<Car, AppError> {
        CarRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| car_not_found(id))
    }

    /// Adds a car to the fleet. New cars are available and held by no order.
    pub async fn create(&self, param: CreateCarParam) -> Result<Car, AppError> {
        let car = CarRepository::new(self.db).create(param).await?;
        tracing::info!("Added car {} ({} {})", car.id, car.make, car.model);

        Ok(car)
    }

    /// Removes a car. Orders that referenced it keep their audit fields.
    ///
    /// # Returns
    /// - `Ok(())` - Car removed
    /// - `Err(AppError::NotFound)` - No car with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CarRepository::new(self.db).delete(id).await? {
            return Err(car_not_found(id));
        }

        tracing::info!("Deleted car {}", id);
        Ok(())
    }

    /// Sets the availability flag. Setting the current value again changes nothing.
    ///
    /// # Returns
    /// - `Ok(Car)` - The car after the update
    /// - `Err(AppError::NotFound)` - No car with that id
    pub async fn set_availability(&self, id: i32, available: bool) -> Result<Car, AppError> {
        let car = CarRepository::new(self.db)
            .set_availability(id, available)
            .await?
            .ok_or_else(|| car_not_found(id))?;

        tracing::debug!("Car {} availability set to {}", id, available);
        Ok(car)
    }

    /// Takes an available car for `order_id`.
    ///
    /// Flips availability off with a conditional update and records the order holding
    /// the car. When the car was already taken nothing is written.
    ///
    /// # Returns
    /// - `Ok(true)` - Car now belongs to `order_id`
    /// - `Ok(false)` - Car missing or no longer available
    pub async fn claim(&self, id: i32, order_id: i32) -> Result<bool, AppError> {
        let car_repo = CarRepository::new(self.db);

        if !car_repo.claim(id).await? {
            return Ok(false);
        }
        car_repo.set_current_order(id, Some(order_id)).await?;

        Ok(true)
    }

    /// Clears the reference to the order holding the car.
    pub async fn clear_current_order(&self, id: i32) -> Result<(), AppError> {
        CarRepository::new(self.db).set_current_order(id, None).await
    }
}

fn car_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Car with id {} not found", id))
}
