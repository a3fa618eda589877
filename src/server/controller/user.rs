use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_cookies::Cookies;

use crate::{
    model::{api::ErrorDto, order::OrderDto, user::UserDto},
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            cookie::AccessTokenCookie,
        },
        model::{order::Order, user::User},
        service::{order::OrderService, user::UserService},
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// GET /current-user - Account behind the presented access token
#[utoipa::path(
    get,
    path = "/current-user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let email = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[])
    .await?;

    let user = UserService::new(&state.db).current_user(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /current-user-order - Oldest pending, paid or active order of the caller
#[utoipa::path(
    get,
    path = "/current-user-order",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's open order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No open order", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user_order(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let email = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[])
    .await?;

    let order = OrderService::new(&state.db).current_for_user(&email).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/current-user-orders",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Orders placed by the caller", body = Vec<OrderDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user_orders(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let email = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[])
    .await?;

    let orders = OrderService::new(&state.db).list_for_user(&email).await?;

    let dto: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();
    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[Permission::Admin])
    .await?;

    let users = UserService::new(&state.db).list().await?;

    let dto: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();
    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The account", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[Permission::Admin])
    .await?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
