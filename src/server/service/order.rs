//! Order lifecycle: booking a car and moving orders between statuses.
//!
//! Every multi-step write runs in one database transaction that is only committed once
//! all steps succeeded; returning early drops the transaction and rolls it back.
//!
//! Any authenticated user may change the status of any order, and any known status
//! may follow any other.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{order::OrderRepository, user::UserRepository},
    error::AppError,
    model::{
        order::{CreateOrderParam, Order, OrderStatus},
        user::User,
    },
    service::car::CarService,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(self.db).get_all().await
    }

    /// # Returns
    /// - `Ok(Order)` - The order
    /// - `Err(AppError::NotFound)` - No order with that id
    pub async fn get(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// All orders still attached to the user, oldest first.
    pub async fn list_for_user(&self, email: &str) -> Result<Vec<Order>, AppError> {
        let user = self.requester(email).await?;

        OrderRepository::new(self.db).get_by_user(user.id).await
    }

    /// The user's oldest order that is still `PENDING`, `PAID` or `ACTIVE`.
    ///
    /// # Returns
    /// - `Ok(Order)` - Open order
    /// - `Err(AppError::NotFound)` - User unknown or without open orders
    pub async fn current_for_user(&self, email: &str) -> Result<Order, AppError> {
        let user = self.requester(email).await?;

        OrderRepository::new(self.db)
            .find_open_by_user(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} has no current order", user.id)))
    }

    /// Books a car for the requester.
    ///
    /// The order is inserted as `PENDING` and the car taken in the same transaction.
    /// Taking the car is a conditional update, so of two requests racing for one car
    /// only the first commits and the other fails as unavailable.
    ///
    /// # Arguments
    /// - `param` - Car id, dates and total price
    /// - `requester_email` - Authenticated identity placing the order
    ///
    /// # Returns
    /// - `Ok(Order)` - Created order, its car now unavailable
    /// - `Err(AppError::NotFound)` - Requester or car does not exist
    /// - `Err(AppError::BadRequest)` - Car unavailable, start date in the past or end
    ///   date before start date
    pub async fn create(
        &self,
        param: CreateOrderParam,
        requester_email: &str,
    ) -> Result<Order, AppError> {
        let user = self.requester(requester_email).await?;
        let car = CarService::new(self.db).get(param.car_id).await?;

        if !car.available {
            tracing::warn!("User {} tried to book unavailable car {}", user.id, car.id);
            return Err(car_unavailable());
        }

        let today = Utc::now().date_naive();
        if param.start_date < today {
            return Err(AppError::BadRequest(
                "Start date cannot be in the past".to_string(),
            ));
        }
        if param.end_date < param.start_date {
            return Err(AppError::BadRequest(
                "End date cannot be before start date".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let order = OrderRepository::new(&txn)
            .create(user.id, &param, Utc::now())
            .await?;

        if !CarService::new(&txn).claim(car.id, order.id).await? {
            tracing::warn!("Car {} was booked by a concurrent request", car.id);
            return Err(car_unavailable());
        }

        let order = OrderRepository::new(&txn)
            .find_by_id(order.id)
            .await?
            .ok_or_else(|| order_not_found(order.id))?;

        txn.commit().await?;

        tracing::info!(
            "User {} booked car {} as order {}",
            user.id,
            car.id,
            order.id
        );
        Ok(order)
    }

    /// Moves an order to the named status.
    ///
    /// `COMPLETED` and `REJECTED` make the car available again. `REJECTED` also clears
    /// the car's current order and detaches the order from its user and car, keeping
    /// id, dates, price, status and creation time.
    ///
    /// # Arguments
    /// - `order_id` - Order to update
    /// - `status_name` - Status name, matched ignoring case
    /// - `acting_email` - Authenticated identity performing the change
    ///
    /// # Returns
    /// - `Ok(Order)` - The order as stored after the change
    /// - `Err(AppError::NotFound)` - Order or acting user does not exist
    /// - `Err(AppError::BadRequest)` - Status name is not a known status
    pub async fn update_status(
        &self,
        order_id: i32,
        status_name: &str,
        acting_email: &str,
    ) -> Result<Order, AppError> {
        let order = self.get(order_id).await?;
        let user = self.requester(acting_email).await?;

        let Some(status) = OrderStatus::parse(status_name) else {
            tracing::warn!(
                "User {} sent unknown status '{}' for order {}",
                user.id,
                status_name,
                order_id
            );
            return Err(AppError::BadRequest(format!(
                "Invalid order status: {}",
                status_name
            )));
        };

        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);
        let car_service = CarService::new(&txn);

        order_repo.set_status(order.id, status).await?;

        if status.is_terminal() {
            if let Some(car) = &order.car {
                car_service.set_availability(car.id, true).await?;
            }
        }

        if status == OrderStatus::Rejected {
            if let Some(car) = &order.car {
                car_service.clear_current_order(car.id).await?;
            }
            order_repo.save_references(&order.clone().detach()).await?;
        }

        let updated = order_repo
            .find_by_id(order.id)
            .await?
            .ok_or_else(|| order_not_found(order.id))?;

        txn.commit().await?;

        tracing::info!(
            "User {} moved order {} from {} to {}",
            user.id,
            order.id,
            order.status.as_str(),
            status.as_str()
        );
        Ok(updated)
    }

    async fn requester(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }
}

fn order_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Order with id {} not found", id))
}

fn car_unavailable() -> AppError {
    AppError::BadRequest("Car is not available for rent".to_string())
}
