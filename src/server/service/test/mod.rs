use chrono::Duration;

use crate::server::service::token::TokenService;

mod auth;
mod car;
mod order;

fn token_service() -> TokenService {
    TokenService::new("service-test-secret-with-32-chars!!", Duration::hours(1))
}
