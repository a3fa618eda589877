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
        car::{CarDto, CreateCarDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, cookie::AccessTokenCookie, json::ApiJson},
        model::car::{Car, CreateCarParam},
        service::car::CarService,
        state::AppState,
    },
};

pub static CAR_TAG: &str = "car";

/// GET /cars - List every car
#[utoipa::path(
    get,
    path = "/cars",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "All cars", body = Vec<CarDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cars = CarService::new(&state.db).list().await?;

    let dto: Vec<CarDto> = cars.into_iter().map(Car::into_dto).collect();
    Ok((StatusCode::OK, Json(dto)))
}

/// GET /cars/available - List cars that can currently be booked
#[utoipa::path(
    get,
    path = "/cars/available",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "Cars that can be booked", body = Vec<CarDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_cars(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cars = CarService::new(&state.db).list_available().await?;

    let dto: Vec<CarDto> = cars.into_iter().map(Car::into_dto).collect();
    Ok((StatusCode::OK, Json(dto)))
}

/// GET /cars/{id} - Get one car
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "The car", body = CarDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// POST /cars - Add a car, available and unbooked
#[utoipa::path(
    post,
    path = "/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Car added to the fleet", body = CarDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    cookies: Cookies,
    ApiJson(payload): ApiJson<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[])
    .await?;

    let car = CarService::new(&state.db)
        .create(CreateCarParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(car.into_dto())))
}

/// DELETE /cars/{id} - Remove a car; its orders keep their other fields
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(
        &state.db,
        &state.tokens,
        AccessTokenCookie::new(&cookies).token(),
    )
    .require(&[])
    .await?;

    CarService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
