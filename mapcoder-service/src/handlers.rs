//! HTTP request handlers for the mapcode service.
//!
//! Handlers only move values between axum extractors and
//! [`MapcodeService`](mapcoder::MapcodeService). Every query value is taken
//! as a string so that validation errors come from the library with a
//! precise field name, not from the extractor.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mapcoder::metrics::MetricsSnapshot;
use mapcoder::service::{
    AlphabetResponse, AlphabetsResponse, DecodeRequest, DecodeResponse, EncodeRequest,
    ListRequest, MapcodesResponse, TerritoriesResponse, TerritoryResponse,
};
use mapcoder::MapcoderError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Query parameters of the coordinate-to-mapcode endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EncodeQuery {
    /// Precision extension length, 0 to 8 (default 0).
    pub precision: Option<String>,
    /// Restrict mapcodes to this territory.
    pub territory: Option<String>,
    /// Restrict mapcodes to this country and its subdivisions.
    pub country: Option<String>,
    /// Alphabet for the `mapcodeInAlphabet` fields.
    pub alphabet: Option<String>,
    /// Comma-separated: `offset`, `territory`, `alphabet`, `rectangle`.
    pub include: Option<String>,
    /// Client kind for metrics: `ios`, `android`, `web`.
    pub client: Option<String>,
    /// Not allowed here; rejected with 400.
    pub context: Option<String>,
}

impl EncodeQuery {
    fn into_request(self, coordinate: String, kind: Option<String>) -> EncodeRequest {
        EncodeRequest {
            coordinate,
            kind,
            precision: self.precision,
            territory: self.territory,
            country: self.country,
            alphabet: self.alphabet,
            include: self.include,
            client: self.client,
            context: self.context,
        }
    }
}

/// Query parameters of the mapcode-to-coordinate endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DecodeQuery {
    /// Territory used to interpret a code without (or with an ambiguous) prefix.
    pub context: Option<String>,
    /// Comma-separated; only `rectangle` has an effect.
    pub include: Option<String>,
    /// Client kind for metrics.
    pub client: Option<String>,
    /// Not allowed here; rejected with 400.
    pub territory: Option<String>,
}

/// Query parameters of the list endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Start of the page; negative values count back from the end.
    pub offset: Option<String>,
    /// Page size (default 1000).
    pub count: Option<String>,
    /// Client kind for metrics.
    pub client: Option<String>,
}

impl From<ListQuery> for ListRequest {
    fn from(query: ListQuery) -> Self {
        ListRequest {
            offset: query.offset,
            count: query.count,
            client: query.client,
        }
    }
}

/// Query parameters of the single-territory endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TerritoryQuery {
    /// Parent territory used to disambiguate subdivision codes.
    pub context: Option<String>,
    pub client: Option<String>,
}

/// Query parameters of the single-alphabet endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientQuery {
    pub client: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Machine-readable error kind, e.g. `OUT_OF_RANGE`.
    pub kind: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Version response.
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    pub service: String,
    pub version: String,
}

/// HTTP status for a library error.
pub fn status_for(e: &MapcoderError) -> StatusCode {
    match e {
        MapcoderError::OutOfRange { .. }
        | MapcoderError::InvalidFormat { .. }
        | MapcoderError::InvalidEnum { .. }
        | MapcoderError::InvalidUsage { .. } => StatusCode::BAD_REQUEST,
        MapcoderError::UnknownTerritory { .. } | MapcoderError::NotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        MapcoderError::Inconsistent { .. } | MapcoderError::Io(_) | MapcoderError::Json(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Create an error response.
fn error_response(e: MapcoderError) -> Response {
    let status = status_for(&e);
    if status.is_server_error() {
        tracing::error!(error = %e, kind = e.kind(), "Request failed");
    } else {
        tracing::warn!(error = %e, kind = e.kind(), "Request rejected");
    }

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
            kind: e.kind().to_string(),
        }),
    )
        .into_response()
}

fn respond<T: Serialize>(result: mapcoder::Result<T>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Convert a coordinate to its local, international and all mapcodes.
#[utoipa::path(
    get,
    path = "/mapcode/codes/{latlon}",
    tag = "mapcode",
    params(
        ("latlon" = String, Path, description = "Latitude and longitude, e.g. `50.141706,6.135864`"),
        EncodeQuery
    ),
    responses(
        (status = 200, description = "Mapcodes for the coordinate", body = MapcodesResponse),
        (status = 400, description = "Invalid parameter", body = ErrorResponse),
        (status = 404, description = "No mapcode for the coordinate", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_mapcodes(
    State(state): State<Arc<AppState>>,
    Path(latlon): Path<String>,
    Query(query): Query<EncodeQuery>,
) -> Response {
    tracing::debug!(latlon = %latlon, "Encode query");
    respond(
        state
            .mapcode_service
            .encode(&query.into_request(latlon, None)),
    )
}

/// Convert a coordinate to one kind of mapcode.
///
/// `local` and `international` return a single mapcode; `mapcodes`
/// returns `{"mapcodes": [...]}`.
#[utoipa::path(
    get,
    path = "/mapcode/codes/{latlon}/{type}",
    tag = "mapcode",
    params(
        ("latlon" = String, Path, description = "Latitude and longitude, e.g. `50.141706,6.135864`"),
        ("type" = String, Path, description = "`mapcodes`, `local` or `international`"),
        EncodeQuery
    ),
    responses(
        (status = 200, description = "The selected mapcode(s)", body = mapcoder::format::MapcodeResult),
        (status = 400, description = "Invalid parameter", body = ErrorResponse),
        (status = 404, description = "No such mapcode for the coordinate", body = ErrorResponse)
    )
)]
pub async fn get_mapcodes_of_type(
    State(state): State<Arc<AppState>>,
    Path((latlon, kind)): Path<(String, String)>,
    Query(query): Query<EncodeQuery>,
) -> Response {
    tracing::debug!(latlon = %latlon, kind = %kind, "Encode query");
    respond(
        state
            .mapcode_service
            .encode(&query.into_request(latlon, Some(kind))),
    )
}

/// Convert a mapcode to a coordinate.
#[utoipa::path(
    get,
    path = "/mapcode/coords/{code}",
    tag = "mapcode",
    params(
        ("code" = String, Path, description = "Mapcode, optionally prefixed by a territory: `LUX JL0.KP`"),
        DecodeQuery
    ),
    responses(
        (status = 200, description = "Decoded coordinate", body = DecodeResponse),
        (status = 400, description = "Invalid parameter", body = ErrorResponse),
        (status = 404, description = "Unknown territory or mapcode", body = ErrorResponse)
    )
)]
pub async fn get_coords(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Query(query): Query<DecodeQuery>,
) -> Response {
    tracing::debug!(code = %code, "Decode query");
    let request = DecodeRequest {
        code,
        context: query.context,
        include: query.include,
        client: query.client,
        territory: query.territory,
    };
    respond(state.mapcode_service.decode(&request))
}

/// List territories.
#[utoipa::path(
    get,
    path = "/mapcode/territories",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "A page of territories", body = TerritoriesResponse),
        (status = 400, description = "Invalid offset or count", body = ErrorResponse)
    )
)]
pub async fn list_territories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    respond(state.mapcode_service.territories(&query.into()))
}

/// Get one territory.
#[utoipa::path(
    get,
    path = "/mapcode/territories/{territory}",
    tag = "catalog",
    params(
        ("territory" = String, Path, description = "Territory code, alias or name"),
        TerritoryQuery
    ),
    responses(
        (status = 200, description = "The territory", body = TerritoryResponse),
        (status = 400, description = "Unknown territory or context", body = ErrorResponse)
    )
)]
pub async fn get_territory(
    State(state): State<Arc<AppState>>,
    Path(territory): Path<String>,
    Query(query): Query<TerritoryQuery>,
) -> Response {
    respond(state.mapcode_service.territory(
        &territory,
        query.context.as_deref(),
        query.client.as_deref(),
    ))
}

/// List alphabets.
#[utoipa::path(
    get,
    path = "/mapcode/alphabets",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "A page of alphabets", body = AlphabetsResponse),
        (status = 400, description = "Invalid offset or count", body = ErrorResponse)
    )
)]
pub async fn list_alphabets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    respond(state.mapcode_service.alphabets(&query.into()))
}

/// Get one alphabet.
#[utoipa::path(
    get,
    path = "/mapcode/alphabets/{alphabet}",
    tag = "catalog",
    params(
        ("alphabet" = String, Path, description = "Alphabet name, e.g. `GREEK`"),
        ClientQuery
    ),
    responses(
        (status = 200, description = "The alphabet", body = AlphabetResponse),
        (status = 400, description = "Unknown alphabet", body = ErrorResponse)
    )
)]
pub async fn get_alphabet(
    State(state): State<Arc<AppState>>,
    Path(alphabet): Path<String>,
    Query(query): Query<ClientQuery>,
) -> Response {
    respond(
        state
            .mapcode_service
            .alphabet(&alphabet, query.client.as_deref()),
    )
}

/// Service version.
#[utoipa::path(
    get,
    path = "/mapcode/version",
    tag = "system",
    responses((status = 200, description = "Service version", body = VersionResponse))
)]
pub async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Request counters per kind and client.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "system",
    responses((status = 200, description = "Request counters"))
)]
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.mapcode_service.metrics())
}
