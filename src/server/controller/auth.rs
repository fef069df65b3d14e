use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, auth::AuthenticationRequestDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTHENTICATION_TAG: &str = "authentication";

/// Issue a bearer token.
///
/// Accepts any credentials with a non-empty username and returns a signed token valid
/// for one hour.
///
/// # Arguments
/// - `state` - Application state containing the token service
/// - `payload` - Username and password
///
/// # Returns
/// - `200 OK` - Signed token as a JSON string
/// - `401 Unauthorized` - Username missing or empty
#[utoipa::path(
    post,
    path = "/api/authentication/authenticate",
    tag = AUTHENTICATION_TAG,
    request_body = AuthenticationRequestDto,
    responses(
        (status = 200, description = "Signed bearer token", body = String),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.tokens.authenticate(payload)?;

    Ok(Json(token))
}
