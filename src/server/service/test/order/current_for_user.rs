use super::*;

/// Tests finding the caller's open order after booking.
///
/// Expected: Ok(Order) equal to the created order
#[tokio::test]
async fn returns_open_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let car = factory::car::create_car(db).await?;
    let service = OrderService::new(db);

    let order = service
        .create(
            booking(car.id, days_from_today(2), days_from_today(3)),
            &user.email,
        )
        .await?;

    assert_eq!(service.current_for_user(&user.email).await?, order);
    assert_eq!(service.list_for_user(&user.email).await?, vec![order]);

    Ok(())
}

/// Tests a caller whose only order was rejected.
///
/// Verifies that the detached order no longer shows up for the user.
///
/// Expected: Err(AppError::NotFound), empty order list
#[tokio::test]
async fn rejected_order_is_not_current() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, order) = factory::helpers::create_booked_car(db).await?;
    let service = OrderService::new(db);

    service
        .update_status(order.id, "REJECTED", &user.email)
        .await?;

    assert!(matches!(
        service.current_for_user(&user.email).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.list_for_user(&user.email).await?.is_empty());

    Ok(())
}
