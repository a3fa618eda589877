use super::*;

/// Tests toggling availability through the service.
///
/// Verifies that setting the same value twice is observably a no-op.
///
/// Expected: Ok(Car) identical after both calls
#[tokio::test]
async fn repeated_calls_are_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car(db).await?;
    let service = CarService::new(db);

    let first = service.set_availability(car.id, false).await?;
    let second = service.set_availability(car.id, false).await?;

    assert!(!first.available);
    assert_eq!(first, second);
    assert_eq!(service.get(car.id).await?, second);

    Ok(())
}

/// Tests a car id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_car() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarService::new(db).set_availability(31, true).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
