use super::*;

/// Tests an anonymous caller on a protected operation.
///
/// Expected: Err(AuthError::Unauthorized)
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let result = AuthGuard::new(db, &tokens, None).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthorized))
    ));

    Ok(())
}

/// Tests an authenticated caller without extra permissions required.
///
/// Verifies that the guard trusts the token subject without loading the account.
///
/// Expected: Ok(email)
#[tokio::test]
async fn returns_email_of_authenticated_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();
    let token = tokens.issue_at("a@x.com", Utc::now())?;

    let email = AuthGuard::new(db, &tokens, Some(token))
        .require(&[])
        .await?;

    assert_eq!(email, "a@x.com");

    Ok(())
}

/// Tests an admin caller on an admin operation.
///
/// Expected: Ok(email)
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    factory::user::UserFactory::new(db)
        .email("admin@x.com")
        .role("ADMIN")
        .build()
        .await?;
    let token = tokens.issue_at("admin@x.com", Utc::now())?;

    let email = AuthGuard::new(db, &tokens, Some(token))
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(email, "admin@x.com");

    Ok(())
}

/// Tests a regular user on an admin operation.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    factory::user::create_user_with_email(db, "a@x.com").await?;
    let token = tokens.issue_at("a@x.com", Utc::now())?;

    let result = AuthGuard::new(db, &tokens, Some(token))
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}
