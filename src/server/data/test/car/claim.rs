use super::*;

/// Tests taking an available car.
///
/// Verifies that the first claim flips the flag and a second claim on the same car
/// changes nothing.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn claims_car_only_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car(db).await?;
    let repo = CarRepository::new(db);

    assert!(repo.claim(car.id).await?);
    assert!(!repo.claim(car.id).await?);

    let stored = repo.find_by_id(car.id).await?.unwrap();
    assert!(!stored.available);

    Ok(())
}

/// Tests recording and clearing the order holding a car.
///
/// Expected: current_order_id set, then None
#[tokio::test]
async fn sets_and_clears_current_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car(db).await?;
    let repo = CarRepository::new(db);

    repo.set_current_order(car.id, Some(7)).await?;
    assert_eq!(
        repo.find_by_id(car.id).await?.unwrap().current_order_id,
        Some(7)
    );

    repo.set_current_order(car.id, None).await?;
    assert_eq!(repo.find_by_id(car.id).await?.unwrap().current_order_id, None);

    Ok(())
}
