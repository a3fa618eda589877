//! Rental order data repository.
//!
//! Orders are always returned with their user and car rows attached (when the
//! references are still set), so services can hand complete `Order` values to
//! controllers.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::order::{CreateOrderParam, Order, OrderStatus},
};

/// Repository providing database operations for rental orders.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `PENDING` order for `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user
    /// - `param` - Car, dates and price of the booking
    /// - `created_at` - Creation timestamp stored with the order
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with user and car attached
    /// - `Err(AppError)` - Insert failed
    pub async fn create(
        &self,
        user_id: i32,
        param: &CreateOrderParam,
        created_at: DateTime<Utc>,
    ) -> Result<Order, AppError> {
        let entity = entity::rental_order::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            car_id: ActiveValue::Set(Some(param.car_id)),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            total_price: ActiveValue::Set(param.total_price),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.attach(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        match entity::prelude::RentalOrder::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(entity) => Ok(Some(self.attach(entity).await?)),
            None => Ok(None),
        }
    }

    /// Returns every order ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let entities = entity::prelude::RentalOrder::find()
            .order_by_asc(entity::rental_order::Column::Id)
            .all(self.db)
            .await?;

        self.attach_all(entities).await
    }

    /// Returns the orders placed by a user, oldest first.
    ///
    /// Rejected orders no longer reference their user and are not included.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        let entities = entity::prelude::RentalOrder::find()
            .filter(entity::rental_order::Column::UserId.eq(user_id))
            .order_by_asc(entity::rental_order::Column::Id)
            .all(self.db)
            .await?;

        self.attach_all(entities).await
    }

    /// Returns the user's oldest order that is `PENDING`, `PAID` or `ACTIVE`.
    pub async fn find_open_by_user(&self, user_id: i32) -> Result<Option<Order>, AppError> {
        let open = OrderStatus::OPEN.map(|status| status.as_str());

        let entity = entity::prelude::RentalOrder::find()
            .filter(entity::rental_order::Column::UserId.eq(user_id))
            .filter(entity::rental_order::Column::Status.is_in(open))
            .order_by_asc(entity::rental_order::Column::Id)
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.attach(entity).await?)),
            None => Ok(None),
        }
    }

    /// Overwrites the stored status.
    ///
    /// # Returns
    /// - `Ok(true)` - Order updated
    /// - `Ok(false)` - No order with that id
    pub async fn set_status(&self, id: i32, status: OrderStatus) -> Result<bool, AppError> {
        let result = entity::prelude::RentalOrder::update_many()
            .col_expr(
                entity::rental_order::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(entity::rental_order::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Persists the relational fields of `order`.
    ///
    /// Stores the ids of `order.user` and `order.car`, clearing the columns when they
    /// are `None`. Scalar fields are left as stored.
    pub async fn save_references(&self, order: &Order) -> Result<(), AppError> {
        let Some(entity) = entity::prelude::RentalOrder::find_by_id(order.id)
            .one(self.db)
            .await?
        else {
            return Err(AppError::NotFound(format!("Order {} not found", order.id)));
        };

        let mut active: entity::rental_order::ActiveModel = entity.into();
        active.user_id = ActiveValue::Set(order.user.as_ref().map(|user| user.id));
        active.car_id = ActiveValue::Set(order.car.as_ref().map(|car| car.id));
        active.update(self.db).await?;

        Ok(())
    }

    async fn attach(&self, entity: entity::rental_order::Model) -> Result<Order, AppError> {
        let user = match entity.user_id {
            Some(user_id) => entity::prelude::User::find_by_id(user_id).one(self.db).await?,
            None => None,
        };
        let car = match entity.car_id {
            Some(car_id) => entity::prelude::Car::find_by_id(car_id).one(self.db).await?,
            None => None,
        };

        Order::from_entity(entity, user, car)
    }

    async fn attach_all(
        &self,
        entities: Vec<entity::rental_order::Model>,
    ) -> Result<Vec<Order>, AppError> {
        let mut orders = Vec::with_capacity(entities.len());
        for entity in entities {
            orders.push(self.attach(entity).await?);
        }

        Ok(orders)
    }
}
