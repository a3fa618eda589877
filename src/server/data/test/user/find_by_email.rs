use super::*;

/// Tests finding an account by email.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("admin@x.com")
        .role("ADMIN")
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_email("admin@x.com").await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests looking up an email with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_email("ghost@x.com").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests a stored role outside the known set.
///
/// Verifies that the row is reported as an internal error instead of being silently
/// mapped to a role.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_for_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("root@x.com")
        .role("ROOT")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_email("root@x.com").await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
