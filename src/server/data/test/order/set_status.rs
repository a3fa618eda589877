use super::*;

/// Tests overwriting an order's status.
///
/// Expected: Ok(true) and the new status stored
#[tokio::test]
async fn stores_new_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_booked_car(db).await?;
    let repo = OrderRepository::new(db);

    let updated = repo.set_status(order.id, OrderStatus::Active).await?;

    assert!(updated);
    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Active);

    Ok(())
}

/// Tests updating an order id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = OrderRepository::new(db)
        .set_status(404, OrderStatus::Paid)
        .await?;

    assert!(!updated);

    Ok(())
}

/// Tests reading a row whose stored status is not a known status.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_for_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let car = factory::car::create_car(db).await?;
    let order = factory::rental_order::OrderFactory::new(db, user.id, car.id)
        .status("LOST")
        .build()
        .await?;

    let result = OrderRepository::new(db).find_by_id(order.id).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
