use super::*;

/// Tests persisting a detached order.
///
/// Verifies that user and car references are cleared while dates, price, status and
/// creation time stay as stored.
///
/// Expected: stored order is detached with unchanged audit fields
#[tokio::test]
async fn clears_references_of_detached_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_booked_car(db).await?;
    let repo = OrderRepository::new(db);

    let before = repo.find_by_id(order.id).await?.unwrap();
    repo.save_references(&before.clone().detach()).await?;
    let after = repo.find_by_id(order.id).await?.unwrap();

    assert!(after.is_detached());
    assert_eq!(after.id, before.id);
    assert_eq!(after.start_date, before.start_date);
    assert_eq!(after.end_date, before.end_date);
    assert_eq!(after.total_price, before.total_price);
    assert_eq!(after.status, before.status);
    assert_eq!(after.created_at, before.created_at);

    Ok(())
}
