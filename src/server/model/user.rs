//! User domain models and parameters.

use crate::{model::user::UserDto, server::error::AppError};

/// Role stored on every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Registered account.
///
/// Carries the stored password hash so the auth service can verify logins; the hash
/// never leaves the server since `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login identifier and token subject.
    pub email: String,
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The user without its password hash
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            AppError::InternalError(format!(
                "User {} has unknown role '{}'",
                entity.id, entity.role
            ))
        })?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            password_hash: entity.password_hash,
            role,
        })
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub username: String,
    /// Already hashed password.
    pub password_hash: String,
    pub role: Role,
}
