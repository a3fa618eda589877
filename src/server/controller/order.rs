use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, UpdateOrderStatusDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, cookie::AccessTokenCookie, json::ApiJson},
        model::order::{CreateOrderParam, Order},
        service::order::OrderService,
        state::AppState,
    },
};

pub static ORDER_TAG: &str = "order";

/// GET /orders - List every order
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "All orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).list().await?;

    let dto: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();
    Ok((StatusCode::OK, Json(dto)))
}

/// GET /orders/{id} - Get one order
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// POST /orders - Book a car for the caller
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created and car reserved", body = OrderDto),
        (status = 400, description = "Car unavailable, invalid dates or malformed request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Car or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    cookies: Cookies,
    ApiJson(payload): ApiJson<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[])
    .await?;

    let order = OrderService::new(&state.db)
        .create(CreateOrderParam::from(payload), &email)
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// PATCH /orders/{id} - Move an order to another status
#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order status updated", body = OrderDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Order or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[])
    .await?;

    let order = OrderService::new(&state.db)
        .update_status(id, &payload.status, &email)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
