//! Authentication service for login and signup.
//!
//! Both operations end by issuing an access token for the account. No server-side
//! session is created, so logging out is left entirely to the client.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, Role, User},
    service::token::TokenService,
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok(String)` - Access token whose subject is `email`
    /// - `Err(AuthError::InvalidCredentials)` - No such account or password mismatch
    /// - `Err(AuthError::PasswordHash)` - Stored hash is unreadable
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            tracing::warn!("Login attempt for unknown email {}", email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!("Login attempt with wrong password for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;
        tracing::info!("User {} logged in", user.id);

        Ok(token)
    }

    /// Registers a `USER` account and issues a token for it.
    ///
    /// # Returns
    /// - `Ok((User, String))` - Created account and its access token
    /// - `Err(AuthError::DuplicateEmail)` - Email already registered; nothing is written
    pub async fn signup(
        &self,
        email: String,
        username: String,
        password: &str,
    ) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.exists_by_email(&email).await? {
            tracing::warn!("Signup rejected, email {} already registered", email);
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = hash_password(password)?;

        let user = user_repo
            .create(CreateUserParam {
                email,
                username,
                password_hash,
                role: Role::User,
            })
            .await
            .map_err(duplicate_email)?;

        let token = self.tokens.issue(&user)?;
        tracing::info!("Registered user {}", user.id);

        Ok((user, token))
    }
}

/// Maps a unique violation raised by a concurrent signup to `DuplicateEmail`.
fn duplicate_email(err: AppError) -> AppError {
    match err {
        AppError::DbErr(db_err)
            if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
        {
            AuthError::DuplicateEmail.into()
        }
        err => err,
    }
}
