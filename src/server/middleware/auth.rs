//! Per-request identity resolution and access checks.
//!
//! Identity comes only from the access token presented with the request. Nothing is
//! cached between requests.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::Role,
    service::token::TokenService,
};

pub enum Permission {
    Admin,
}

/// Who is making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    /// Email taken from a valid token's subject.
    Authenticated(String),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    token: Option<String>,
}

impl<'a> AuthGuard<'a> {
    /// # Arguments
    /// - `db` - Database connection, used for role checks
    /// - `tokens` - Token service verifying the presented token
    /// - `token` - Raw token from the access token cookie, if any
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        token: Option<String>,
    ) -> Self {
        Self { db, tokens, token }
    }

    pub fn resolve(&self) -> Identity {
        Self::resolve_token(self.tokens, self.token.as_deref())
    }

    /// Maps a raw token to an identity.
    ///
    /// Absent, malformed, forged and expired tokens all resolve to `Anonymous`.
    pub fn resolve_token(tokens: &TokenService, token: Option<&str>) -> Identity {
        let Some(token) = token else {
            return Identity::Anonymous;
        };

        let Ok(email) = tokens.subject(token) else {
            return Identity::Anonymous;
        };

        if tokens.is_valid(token, &email) {
            Identity::Authenticated(email)
        } else {
            Identity::Anonymous
        }
    }

    /// Requires an authenticated caller holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(String)` - Email of the authenticated caller
    /// - `Err(AuthError::Unauthorized)` - No valid token
    /// - `Err(AuthError::AccessDenied)` - Caller lacks a permission or has no account
    pub async fn require(&self, permissions: &[Permission]) -> Result<String, AppError> {
        let Identity::Authenticated(email) = self.resolve() else {
            return Err(AuthError::Unauthorized.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let user = UserRepository::new(self.db).find_by_email(&email).await?;

                    if !matches!(user, Some(ref user) if user.role == Role::Admin) {
                        return Err(AuthError::AccessDenied(email).into());
                    }
                }
            }
        }

        Ok(email)
    }
}
