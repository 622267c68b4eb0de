//! mapcoder-service - HTTP microservice for mapcode conversion.
//!
//! A REST API converting coordinates to mapcodes and back, plus the
//! territory and alphabet catalogs.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `MAPCODER_CODEC_TABLE` | JSON codec table | empty table |
//! | `MAPCODER_PORT` | HTTP server port | 8080 |
//! | `MAPCODER_REQUEST_TIMEOUT_SECS` | Upper bound on request processing | 30 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | [`DEFAULT_LOG_FILTER`] |
//!
//! ## Endpoints
//!
//! - `GET /mapcode/codes/{lat,lon}[/{type}]` - Coordinate to mapcodes
//! - `GET /mapcode/coords/{code}` - Mapcode to coordinate
//! - `GET /mapcode/territories[/{territory}]` - Territory catalog
//! - `GET /mapcode/alphabets[/{alphabet}]` - Alphabet catalog
//! - `GET /mapcode/version`, `GET /health`, `GET /metrics` - System
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mapcoder::MapcodeServiceBuilder;
use mapcoder_service::{router, AppState, DEFAULT_LOG_FILTER};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = env_or("MAPCODER_PORT", 8080);
    let timeout_secs: u64 = env_or("MAPCODER_REQUEST_TIMEOUT_SECS", 30);

    // The library handles MAPCODER_CODEC_TABLE
    let builder = MapcodeServiceBuilder::from_env();
    let table = builder.table_path().map(|p| p.display().to_string());
    let mapcode_service = builder.build()?;

    tracing::info!(
        codec_table = table.as_deref().unwrap_or("<none>"),
        timeout_secs,
        port,
        "Starting mapcoder service"
    );

    let state = Arc::new(AppState { mapcode_service });

    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
