//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, an unavailable car and a pending order linking both.
///
/// The car is marked unavailable and points at the order, matching the state
/// left behind by a successful booking.
///
/// # Returns
/// - `Ok((user, car, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booked_car(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::car::Model,
        entity::rental_order::Model,
    ),
    DbErr,
> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let user = crate::factory::user::create_user(db).await?;
    let car = crate::factory::car::CarFactory::new(db)
        .available(false)
        .build()
        .await?;
    let order = crate::factory::rental_order::create_order(db, user.id, car.id).await?;

    let mut active: entity::car::ActiveModel = car.into();
    active.current_order_id = ActiveValue::Set(Some(order.id));
    let car = active.update(db).await?;

    Ok((user, car, order))
}
