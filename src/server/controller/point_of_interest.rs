use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        point_of_interest::{
            JsonPatchOperationDto, PointOfInterestDto, PointOfInterestForCreationDto,
            PointOfInterestForUpdateDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::point_of_interest::{NewPointOfInterest, PointOfInterest, PointOfInterestForUpdate},
        service::point_of_interest::PointOfInterestService,
        state::AppState,
    },
};

/// Tag for grouping point of interest endpoints in OpenAPI documentation
pub static POINT_OF_INTEREST_TAG: &str = "point_of_interest";

fn not_found(city_id: i32, point_of_interest_id: i32) -> AppError {
    tracing::info!(
        "Point of interest with id {} in city {} wasn't found.",
        point_of_interest_id,
        city_id
    );
    AppError::NotFound(format!(
        "Point of interest with id {} not found in city {}",
        point_of_interest_id, city_id
    ))
}

/// Get the points of interest of a city.
///
/// # Access Control
/// - Valid bearer token satisfying the city policy
///
/// # Returns
/// - `200 OK` - Points of interest ordered by id
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token rejected by the city policy
/// - `404 Not Found` - City does not exist
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/pointsofinterest",
    tag = POINT_OF_INTEREST_TAG,
    params(("city_id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "Points of interest of the city", body = Vec<PointOfInterestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Token rejected by the city policy", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_points_of_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::CityPolicy])?;

    let service =
        PointOfInterestService::new(state.store.open().await?, state.mail_service.clone());

    let Some(points_of_interest) = service.list(city_id).await? else {
        tracing::info!(
            "City with id {} wasn't found when accessing points of interest.",
            city_id
        );
        return Err(AppError::NotFound(format!(
            "City with id {} not found",
            city_id
        )));
    };

    let dtos: Vec<PointOfInterestDto> = points_of_interest
        .into_iter()
        .map(PointOfInterest::into_dto)
        .collect();

    Ok(Json(dtos))
}

/// Get a point of interest of a city.
///
/// # Access Control
/// - Valid bearer token satisfying the city policy
///
/// # Returns
/// - `200 OK` - The point of interest
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token rejected by the city policy
/// - `404 Not Found` - City or point of interest does not exist
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/pointsofinterest/{point_of_interest_id}",
    tag = POINT_OF_INTEREST_TAG,
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("point_of_interest_id" = i32, Path, description = "Point of interest id")
    ),
    responses(
        (status = 200, description = "The point of interest", body = PointOfInterestDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Token rejected by the city policy", body = ErrorDto),
        (status = 404, description = "City or point of interest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_point_of_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((city_id, point_of_interest_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::CityPolicy])?;

    let service =
        PointOfInterestService::new(state.store.open().await?, state.mail_service.clone());

    let Some(point_of_interest) = service.get(city_id, point_of_interest_id).await? else {
        return Err(not_found(city_id, point_of_interest_id));
    };

    Ok(Json(point_of_interest.into_dto()))
}

/// Create a point of interest in a city.
///
/// The new point of interest gets the next id across all cities.
///
/// # Access Control
/// - Valid bearer token satisfying the city policy
///
/// # Returns
/// - `201 Created` - Created point of interest, with its URL in `Location`
/// - `400 Bad Request` - Name missing or too long, description too long
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token rejected by the city policy
/// - `404 Not Found` - City does not exist
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    post,
    path = "/api/cities/{city_id}/pointsofinterest",
    tag = POINT_OF_INTEREST_TAG,
    params(("city_id" = i32, Path, description = "City id")),
    request_body = PointOfInterestForCreationDto,
    responses(
        (status = 201, description = "Point of interest created", body = PointOfInterestDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Token rejected by the city policy", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_point_of_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(city_id): Path<i32>,
    payload: Result<Json<PointOfInterestForCreationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::CityPolicy])?;
    let Json(payload) = payload?;

    let service =
        PointOfInterestService::new(state.store.open().await?, state.mail_service.clone());

    let draft = NewPointOfInterest::from_dto(city_id, payload);

    let Some(created) = service.create(draft).await? else {
        tracing::info!(
            "City with id {} wasn't found when creating a point of interest.",
            city_id
        );
        return Err(AppError::NotFound(format!(
            "City with id {} not found",
            city_id
        )));
    };

    let location = format!(
        "/api/cities/{}/pointsofinterest/{}",
        city_id, created.id
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.into_dto()),
    ))
}

/// Replace a point of interest.
///
/// Both name and description are overwritten; an omitted description clears it.
///
/// # Access Control
/// - Valid bearer token satisfying the city policy
///
/// # Returns
/// - `204 No Content` - Point of interest updated
/// - `400 Bad Request` - Name missing or too long, description too long
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token rejected by the city policy
/// - `404 Not Found` - City or point of interest does not exist
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    put,
    path = "/api/cities/{city_id}/pointsofinterest/{point_of_interest_id}",
    tag = POINT_OF_INTEREST_TAG,
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("point_of_interest_id" = i32, Path, description = "Point of interest id")
    ),
    request_body = PointOfInterestForUpdateDto,
    responses(
        (status = 204, description = "Point of interest updated"),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Token rejected by the city policy", body = ErrorDto),
        (status = 404, description = "City or point of interest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_point_of_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((city_id, point_of_interest_id)): Path<(i32, i32)>,
    payload: Result<Json<PointOfInterestForUpdateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::CityPolicy])?;
    let Json(payload) = payload?;

    let service =
        PointOfInterestService::new(state.store.open().await?, state.mail_service.clone());

    let update = PointOfInterestForUpdate::from_dto(payload);

    if !service
        .update(city_id, point_of_interest_id, update)
        .await?
    {
        return Err(not_found(city_id, point_of_interest_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Partially update a point of interest with a JSON Patch document.
///
/// Only `replace` operations on `/name` and `/description` are supported. The document
/// is applied to the current values and the result is validated before anything is
/// stored.
///
/// # Access Control
/// - Valid bearer token satisfying the city policy
///
/// # Returns
/// - `204 No Content` - Point of interest updated
/// - `400 Bad Request` - Malformed document or resulting values invalid
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token rejected by the city policy
/// - `404 Not Found` - City or point of interest does not exist
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    patch,
    path = "/api/cities/{city_id}/pointsofinterest/{point_of_interest_id}",
    tag = POINT_OF_INTEREST_TAG,
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("point_of_interest_id" = i32, Path, description = "Point of interest id")
    ),
    request_body(content = Vec<JsonPatchOperationDto>, content_type = "application/json-patch+json"),
    responses(
        (status = 204, description = "Point of interest updated"),
        (status = 400, description = "Malformed patch document or validation failed", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Token rejected by the city policy", body = ErrorDto),
        (status = 404, description = "City or point of interest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn patch_point_of_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((city_id, point_of_interest_id)): Path<(i32, i32)>,
    document: Result<Json<Vec<JsonPatchOperationDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::CityPolicy])?;
    let Json(document) = document?;

    let service =
        PointOfInterestService::new(state.store.open().await?, state.mail_service.clone());

    if !service
        .patch(city_id, point_of_interest_id, document)
        .await?
    {
        return Err(not_found(city_id, point_of_interest_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a point of interest.
///
/// A notification mail is sent once the deletion has been stored.
///
/// # Access Control
/// - Valid bearer token satisfying the city policy
///
/// # Returns
/// - `204 No Content` - Point of interest deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token rejected by the city policy
/// - `404 Not Found` - City or point of interest does not exist
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    delete,
    path = "/api/cities/{city_id}/pointsofinterest/{point_of_interest_id}",
    tag = POINT_OF_INTEREST_TAG,
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("point_of_interest_id" = i32, Path, description = "Point of interest id")
    ),
    responses(
        (status = 204, description = "Point of interest deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Token rejected by the city policy", body = ErrorDto),
        (status = 404, description = "City or point of interest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_point_of_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((city_id, point_of_interest_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::CityPolicy])?;

    let service =
        PointOfInterestService::new(state.store.open().await?, state.mail_service.clone());

    if !service.delete(city_id, point_of_interest_id).await? {
        return Err(not_found(city_id, point_of_interest_id));
    }

    Ok(StatusCode::NO_CONTENT)
}
