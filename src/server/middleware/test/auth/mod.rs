use chrono::{Duration, Utc};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Identity, Permission},
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod resolve;

fn token_service() -> TokenService {
    TokenService::new("guard-test-secret-with-32-chars!!!", Duration::hours(1))
}
