use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::Role,
    service::{auth::AuthService, test::token_service},
    util::password::hash_password,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
