use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, car, order, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Rental API", description = "Car booking backend"),
    tags(
        (name = "auth", description = "Login, signup and logout"),
        (name = "car", description = "Fleet management"),
        (name = "order", description = "Bookings and their status"),
        (name = "user", description = "Accounts and the caller's orders"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::signup))
        .routes(routes!(auth::logout))
        .routes(routes!(car::get_cars, car::create_car))
        .routes(routes!(car::get_available_cars))
        .routes(routes!(car::get_car, car::delete_car))
        .routes(routes!(order::get_orders, order::create_order))
        .routes(routes!(order::get_order, order::update_order_status))
        .routes(routes!(user::get_current_user))
        .routes(routes!(user::get_current_user_order))
        .routes(routes!(user::get_current_user_orders))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user))
        .split_for_parts();

    router
        .route("/health", get(health))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

async fn health() -> &'static str {
    "OK"
}
