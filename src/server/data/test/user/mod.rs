use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
};
use test_utils::{builder::TestBuilder, factory};

mod exists_by_email;
mod find_by_email;
