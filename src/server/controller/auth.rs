use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, SignupDto, TokenDto},
    },
    server::{
        error::AppError,
        middleware::{cookie::AccessTokenCookie, json::ApiJson},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// POST /login - Exchange email and password for an access token
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, access token cookie set", body = TokenDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    AccessTokenCookie::new(&cookies).set_token(token.clone());

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// POST /signup - Register a USER account and sign it in
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "Account created, access token cookie set", body = TokenDto),
        (status = 400, description = "Email already exists or malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    cookies: Cookies,
    ApiJson(payload): ApiJson<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, token) = AuthService::new(&state.db, &state.tokens)
        .signup(payload.email, payload.username, &payload.password)
        .await?;

    AccessTokenCookie::new(&cookies).set_token(token.clone());

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

/// GET /logout - Clear the access token cookie
///
/// Tokens are not tracked server-side, so a copied token stays usable until it expires.
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Access token cookie cleared", body = MessageDto)
    ),
)]
pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    AccessTokenCookie::new(&cookies).clear();

    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    )
}
