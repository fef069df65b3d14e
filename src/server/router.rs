use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue},
    Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, city,
        file::{self, FILES_API_VERSION},
        point_of_interest,
    },
    service::file::MAX_UPLOAD_BYTES,
    state::AppState,
};

/// Room for multipart boundaries and headers on top of the largest accepted file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

const API_SUPPORTED_VERSIONS: &str = "api-supported-versions";

#[derive(OpenApi)]
#[openapi(
    info(title = "CityInfo API", description = "Cities and their points of interest"),
    modifiers(&SecurityAddon),
    tags(
        (name = "authentication", description = "Bearer token issuing"),
        (name = "city", description = "Cities"),
        (name = "point_of_interest", description = "Points of interest of a city"),
        (name = "file", description = "Versioned document download and upload")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

fn files_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(file::download_file))
        .routes(routes!(file::upload_file))
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(API_SUPPORTED_VERSIONS),
            HeaderValue::from_static(FILES_API_VERSION),
        ))
}

/// Builds the application router with OpenAPI documentation served at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::authenticate))
        .routes(routes!(city::get_cities))
        .routes(routes!(city::get_city))
        .routes(routes!(
            point_of_interest::get_points_of_interest,
            point_of_interest::create_point_of_interest
        ))
        .routes(routes!(
            point_of_interest::get_point_of_interest,
            point_of_interest::update_point_of_interest,
            point_of_interest::patch_point_of_interest,
            point_of_interest::delete_point_of_interest
        ))
        .merge(files_router())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
