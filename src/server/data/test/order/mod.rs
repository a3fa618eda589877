use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{CreateOrderParam, OrderStatus},
};
use chrono::{Days, Utc};
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod save_references;
mod set_status;
