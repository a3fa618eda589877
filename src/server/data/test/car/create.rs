use super::*;

/// Tests adding a car to the fleet.
///
/// Verifies that new cars are available and not held by any order.
///
/// Expected: Ok(Car) with available=true and no current order
#[tokio::test]
async fn creates_available_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = CarRepository::new(db)
        .create(CreateCarParam {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            price_per_day: Decimal::new(4999, 2),
        })
        .await?;

    assert_eq!(car.make, "Toyota");
    assert_eq!(car.model, "Corolla");
    assert_eq!(car.year, 2021);
    assert_eq!(car.price_per_day, Decimal::new(4999, 2));
    assert!(car.available);
    assert_eq!(car.current_order_id, None);

    let stored = CarRepository::new(db).find_by_id(car.id).await?;
    assert_eq!(stored, Some(car));

    Ok(())
}
