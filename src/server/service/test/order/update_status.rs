use super::*;

/// Tests completing an order.
///
/// Verifies that the car becomes available again while the order keeps its
/// references.
///
/// Expected: Ok(Order) with status Completed, car available
#[tokio::test]
async fn completed_releases_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car, order) = factory::helpers::create_booked_car(db).await?;

    let updated = OrderService::new(db)
        .update_status(order.id, "COMPLETED", &user.email)
        .await?;

    assert_eq!(updated.status, OrderStatus::Completed);
    assert!(!updated.is_detached());
    assert!(CarService::new(db).get(car.id).await?.available);

    Ok(())
}

/// Tests rejecting an order.
///
/// Verifies that the car is released and its current order cleared, and that the
/// returned order lost its user and car but kept its audit fields.
///
/// Expected: Ok(Order) detached with status Rejected
#[tokio::test]
async fn rejected_releases_car_and_detaches_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car, order) = factory::helpers::create_booked_car(db).await?;
    let service = OrderService::new(db);
    let before = service.get(order.id).await?;

    let updated = service
        .update_status(order.id, "REJECTED", &user.email)
        .await?;

    assert_eq!(updated.status, OrderStatus::Rejected);
    assert!(updated.user.is_none());
    assert!(updated.car.is_none());
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.start_date, before.start_date);
    assert_eq!(updated.end_date, before.end_date);
    assert_eq!(updated.total_price, before.total_price);
    assert_eq!(updated.created_at, before.created_at);
    assert_eq!(service.get(order.id).await?, updated);

    let car = CarService::new(db).get(car.id).await?;
    assert!(car.available);
    assert_eq!(car.current_order_id, None);

    Ok(())
}

/// Tests non-terminal statuses.
///
/// Verifies that PAID and ACTIVE leave the car booked and that names match
/// regardless of case.
///
/// Expected: Ok(Order) with the new status, car still unavailable
#[tokio::test]
async fn open_statuses_keep_car_booked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car, order) = factory::helpers::create_booked_car(db).await?;
    let service = OrderService::new(db);

    let paid = service.update_status(order.id, "paid", &user.email).await?;
    let active = service.update_status(order.id, "Active", &user.email).await?;

    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(active.status, OrderStatus::Active);
    assert!(!CarService::new(db).get(car.id).await?.available);

    Ok(())
}

/// Tests that any status may follow any other.
///
/// Verifies a direct PENDING to COMPLETED jump and that another user than the
/// requester may perform it.
///
/// Expected: Ok(Order) with status Completed
#[tokio::test]
async fn accepts_any_transition_from_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_booked_car(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let updated = OrderService::new(db)
        .update_status(order.id, "completed", &stranger.email)
        .await?;

    assert_eq!(updated.status, OrderStatus::Completed);

    Ok(())
}

/// Tests an unparseable status name.
///
/// Verifies that the order and car are left untouched.
///
/// Expected: Err(AppError::BadRequest), order unchanged
#[tokio::test]
async fn rejects_unknown_status_without_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car, order) = factory::helpers::create_booked_car(db).await?;
    let service = OrderService::new(db);
    let before = service.get(order.id).await?;

    let result = service
        .update_status(order.id, "CANCELLED", &user.email)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(order.id).await?, before);
    assert!(!CarService::new(db).get(car.id).await?.available);

    Ok(())
}

/// Tests unknown order ids and unknown acting users.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn fails_for_missing_order_or_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, order) = factory::helpers::create_booked_car(db).await?;
    let service = OrderService::new(db);

    let missing_order = service
        .update_status(order.id + 1, "PAID", &user.email)
        .await;
    let missing_user = service
        .update_status(order.id, "PAID", "ghost@x.com")
        .await;

    assert!(matches!(missing_order, Err(AppError::NotFound(_))));
    assert!(matches!(missing_user, Err(AppError::NotFound(_))));
    assert_eq!(service.get(order.id).await?.status, OrderStatus::Pending);

    Ok(())
}
