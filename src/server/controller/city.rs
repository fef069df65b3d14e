use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        city::{CityDto, CityWithoutPointsOfInterestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::city::City,
        service::city::CityService,
        state::AppState,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct GetCityParams {
    /// Include the city's points of interest in the response.
    #[serde(default)]
    pub include_points_of_interest: bool,
}

/// Get all cities.
///
/// Returns every city ordered by name, without points of interest.
///
/// # Access Control
/// - Valid bearer token
///
/// # Returns
/// - `200 OK` - List of cities
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "All cities", body = Vec<CityWithoutPointsOfInterestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = CityService::new(state.store.open().await?);

    let cities: Vec<CityWithoutPointsOfInterestDto> = service
        .list()
        .await?
        .into_iter()
        .map(City::into_summary_dto)
        .collect();

    Ok(Json(cities))
}

/// Get a city by id.
///
/// Returns the city with its points of interest when `includePointsOfInterest` is true,
/// otherwise only the city itself.
///
/// # Access Control
/// - Valid bearer token
///
/// # Returns
/// - `200 OK` - The city
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - City does not exist
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}",
    tag = CITY_TAG,
    params(
        ("city_id" = i32, Path, description = "City id"),
        GetCityParams
    ),
    responses(
        (status = 200, description = "The city, with points of interest when requested", body = CityDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(city_id): Path<i32>,
    Query(params): Query<GetCityParams>,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = CityService::new(state.store.open().await?);

    let Some(city) = service
        .get(city_id, params.include_points_of_interest)
        .await?
    else {
        tracing::info!("City with id {} wasn't found.", city_id);
        return Err(AppError::NotFound(format!(
            "City with id {} not found",
            city_id
        )));
    };

    if params.include_points_of_interest {
        Ok(Json(city.into_dto()).into_response())
    } else {
        Ok(Json(city.into_summary_dto()).into_response())
    }
}
