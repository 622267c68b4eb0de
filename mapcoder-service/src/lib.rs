//! mapcoder service library
//!
//! HTTP handlers, routes and OpenAPI document for the mapcode service.
//! This library is used by both the mapcoder-service binary and integration tests.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use mapcoder::MapcodeService;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Log directives used when `RUST_LOG` is not set.
///
/// The library crate logs dropped candidates and per-request results, so it
/// is enabled alongside the service and the HTTP trace layer.
pub const DEFAULT_LOG_FILTER: &str = "mapcoder=info,mapcoder_service=info,tower_http=info";

/// Application state shared across handlers.
pub struct AppState {
    /// Mapcode conversions, catalogs and request counters.
    pub mapcode_service: MapcodeService,
}

/// OpenAPI documentation for the mapcode service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mapcode Service",
        version = "0.1.0",
        description = "REST API converting between coordinates and mapcodes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::get_mapcodes,
        handlers::get_mapcodes_of_type,
        handlers::get_coords,
        handlers::list_territories,
        handlers::get_territory,
        handlers::list_alphabets,
        handlers::get_alphabet,
        handlers::get_version,
        handlers::health_check,
        handlers::get_metrics,
    ),
    components(
        schemas(
            mapcoder::geo::Point,
            mapcoder::geo::Rectangle,
            mapcoder::format::MapcodeResult,
            mapcoder::service::MapcodesResponse,
            mapcoder::service::MapcodeListResponse,
            mapcoder::service::DecodeResponse,
            mapcoder::service::TerritoryResponse,
            mapcoder::service::TerritoriesResponse,
            mapcoder::service::AlphabetResponse,
            mapcoder::service::AlphabetsResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
            handlers::VersionResponse,
        )
    ),
    tags(
        (name = "mapcode", description = "Coordinate and mapcode conversion"),
        (name = "catalog", description = "Territory and alphabet catalogs"),
        (name = "system", description = "System and health endpoints")
    )
)]
pub struct ApiDoc;

/// All routes, including `/docs`, without transport layers.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/mapcode/codes/:latlon", get(handlers::get_mapcodes))
        .route(
            "/mapcode/codes/:latlon/:type",
            get(handlers::get_mapcodes_of_type),
        )
        .route("/mapcode/coords/:code", get(handlers::get_coords))
        .route("/mapcode/territories", get(handlers::list_territories))
        .route(
            "/mapcode/territories/:territory",
            get(handlers::get_territory),
        )
        .route("/mapcode/alphabets", get(handlers::list_alphabets))
        .route("/mapcode/alphabets/:alphabet", get(handlers::get_alphabet))
        .route("/mapcode/version", get(handlers::get_version))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::get_metrics))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{ErrorResponse, HealthResponse, VersionResponse};
