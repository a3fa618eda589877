use super::*;

/// Tests inserting an order.
///
/// Verifies that the order is stored as PENDING with the request's dates and price,
/// and comes back with its user and car attached.
///
/// Expected: Ok(Order) with status Pending and relations present
#[tokio::test]
async fn creates_pending_order_with_relations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let car = factory::car::create_car(db).await?;

    let start_date = Utc::now().date_naive() + Days::new(1);
    let param = CreateOrderParam {
        car_id: car.id,
        start_date,
        end_date: start_date + Days::new(3),
        total_price: Decimal::new(15000, 2),
    };
    let created_at = Utc::now();

    let order = OrderRepository::new(db)
        .create(user.id, &param, created_at)
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.start_date, param.start_date);
    assert_eq!(order.end_date, param.end_date);
    assert_eq!(order.total_price, Decimal::new(15000, 2));
    assert_eq!(order.user.as_ref().map(|u| u.id), Some(user.id));
    assert_eq!(order.car.as_ref().map(|c| c.id), Some(car.id));

    let stored = OrderRepository::new(db).find_by_id(order.id).await?;
    assert_eq!(stored, Some(order));

    Ok(())
}
