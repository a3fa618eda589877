use super::*;

/// Tests listing bookable cars.
///
/// Verifies that only cars with the availability flag set are returned.
///
/// Expected: Ok(Vec<Car>) containing only the available car
#[tokio::test]
async fn returns_only_available_cars() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let available = factory::car::create_car(db).await?;
    factory::car::CarFactory::new(db)
        .available(false)
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let cars = repo.get_available().await?;
    let all = repo.get_all().await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, available.id);
    assert_eq!(all.len(), 2);

    Ok(())
}
