//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying access tokens

use sea_orm::DatabaseConnection;

use crate::server::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` shares its pool and
/// `TokenService` only holds the secret and TTL.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues tokens at login/signup and verifies them on protected routes.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the server secret and TTL
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
