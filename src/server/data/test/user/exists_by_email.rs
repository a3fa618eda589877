use super::*;

/// Tests detecting a registered email.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_registered_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "a@x.com").await?;

    let exists = UserRepository::new(db).exists_by_email("a@x.com").await?;

    assert!(exists);

    Ok(())
}

/// Tests an email nobody registered.
///
/// Verifies that other accounts do not make an unrelated email count as taken.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "a@x.com").await?;

    let exists = UserRepository::new(db).exists_by_email("b@x.com").await?;

    assert!(!exists);

    Ok(())
}
