use super::*;

/// Tests deleting a car that has orders.
///
/// Verifies that the car row is removed while the order row survives with its car
/// reference cleared.
///
/// Expected: Ok(true), order.car_id = None
#[tokio::test]
async fn deletes_car_and_keeps_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car, order) = factory::helpers::create_booked_car(db).await?;

    let deleted = CarRepository::new(db).delete(car.id).await?;

    assert!(deleted);
    assert!(CarRepository::new(db).find_by_id(car.id).await?.is_none());

    let order = entity::prelude::RentalOrder::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(order.car_id, None);
    assert_eq!(order.user_id, Some(user.id));

    Ok(())
}

/// Tests deleting a car id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CarRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
