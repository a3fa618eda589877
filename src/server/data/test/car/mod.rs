use crate::server::{data::car::CarRepository, error::AppError, model::car::CreateCarParam};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod create;
mod delete;
mod get_available;
