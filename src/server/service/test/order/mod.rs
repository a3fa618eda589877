use crate::server::{
    error::AppError,
    model::order::{CreateOrderParam, OrderStatus},
    service::{car::CarService, order::OrderService},
};
use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod current_for_user;
mod update_status;

fn days_from_today(days: u64) -> NaiveDate {
    Utc::now().date_naive() + Days::new(days)
}

fn booking(car_id: i32, start_date: NaiveDate, end_date: NaiveDate) -> CreateOrderParam {
    CreateOrderParam {
        car_id,
        start_date,
        end_date,
        total_price: Decimal::new(15000, 2),
    }
}
