//! Integration tests for the HTTP API.

use axum::http::StatusCode;
use axum_test::TestServer;
use mapcoder::geo::Point;
use mapcoder::{Alphabet, Mapcode, MapcodeService, MapcodeServiceBuilder, TableCodec, Territory};
use mapcoder::service::EncodeRequest;
use mapcoder_service::{router, AppState, DEFAULT_LOG_FILTER};
use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

fn territory(code: &str) -> Territory {
    Territory::from_code(code).unwrap()
}

/// The Luxembourg fixture: two LUX codes, one BEL code, the international code.
fn fixture_codec() -> TableCodec {
    let point = Point::new(50.141706, 6.135864);
    TableCodec::new()
        .with_mapcode(point, Mapcode::new("JL0.KP", "4N7V2QKR", territory("LUX")), None)
        .with_mapcode(point, Mapcode::new("R8RN.07Z", "", territory("LUX")), None)
        .with_mapcode(point, Mapcode::new("SQB.NR3", "", territory("BEL")), None)
        .with_mapcode(point, Mapcode::new("VJ0L6.9PNQ", "M3X8", Territory::AAA), None)
        .with_transliteration(Alphabet::Greek, "JL0.KP", "ΠΛ0.ΚΡ")
}

/// Create a test server over the fixture table.
fn create_test_server() -> TestServer {
    let state = Arc::new(AppState {
        mapcode_service: MapcodeService::new(fixture_codec()),
    });
    TestServer::new(router(state)).unwrap()
}

fn assert_error(json: &Value, kind: &str) {
    assert_eq!(json["kind"], kind, "unexpected error body: {}", json);
    assert!(json["error"].as_str().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
async fn test_encode_all_sections() {
    let server = create_test_server();

    let response = server.get("/mapcode/codes/50.141706,6.135864").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["local"]["mapcode"], "JL0.KP");
    assert_eq!(json["local"]["territory"], "LUX");
    assert_eq!(json["international"]["mapcode"], "VJ0L6.9PNQ");
    assert!(json["international"].get("territory").is_none());
    assert_eq!(json["mapcodes"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_encode_local_and_international() {
    let server = create_test_server();

    let response = server.get("/mapcode/codes/50.141706,6.135864/local").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["mapcode"], "JL0.KP");
    assert_eq!(json["territory"], "LUX");

    let response = server
        .get("/mapcode/codes/50.141706,6.135864/International?precision=2")
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["mapcode"], "VJ0L6.9PNQ-M3");
}

#[tokio::test]
async fn test_encode_mapcodes_list() {
    let server = create_test_server();

    let response = server
        .get("/mapcode/codes/50.141706,6.135864/mapcodes?include=territory")
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    let codes: Vec<&str> = json["mapcodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["mapcode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["JL0.KP", "R8RN.07Z", "SQB.NR3", "VJ0L6.9PNQ"]);
    assert_eq!(json["mapcodes"][3]["territory"], "AAA");
}

#[tokio::test]
async fn test_encode_include_flags() {
    let server = create_test_server();

    let response = server
        .get("/mapcode/codes/50.141706,6.135864/local?include=offset,rectangle&alphabet=greek")
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["mapcodeInAlphabet"], "ΠΛ0.ΚΡ");
    assert!(json["offsetMeters"].as_f64().unwrap() < 1.0);
    assert!(json["rectangle"]["southWest"]["latDeg"].is_number());
    assert!(json["rectangle"]["northEast"]["lonDeg"].is_number());
}

#[tokio::test]
async fn test_encode_territory_filter() {
    let server = create_test_server();

    let response = server
        .get("/mapcode/codes/50.141706,6.135864/local?territory=BEL")
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["mapcode"], "SQB.NR3");
    assert_eq!(json["territory"], "BEL");

    // No code in France for this coordinate
    let response = server
        .get("/mapcode/codes/50.141706,6.135864/local?territory=FRA")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_error(&response.json(), "NOT_FOUND");
}

#[tokio::test]
async fn test_encode_invalid_parameters() {
    let server = create_test_server();

    let cases = [
        ("/mapcode/codes/91,0", "OUT_OF_RANGE"),
        ("/mapcode/codes/abc,0", "INVALID_FORMAT"),
        ("/mapcode/codes/50.1", "INVALID_FORMAT"),
        ("/mapcode/codes/50,6?precision=9", "OUT_OF_RANGE"),
        ("/mapcode/codes/50,6?include=everything", "INVALID_ENUM"),
        ("/mapcode/codes/50,6?territory=Atlantis", "INVALID_ENUM"),
        ("/mapcode/codes/50,6?alphabet=runic", "INVALID_ENUM"),
        ("/mapcode/codes/50,6/nearest", "INVALID_ENUM"),
        ("/mapcode/codes/50,6?context=NLD", "INVALID_USAGE"),
    ];
    for (path, kind) in cases {
        let response = server.get(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_error(&response.json(), kind);
    }
}

#[tokio::test]
async fn test_encode_unknown_coordinate() {
    let server = create_test_server();

    let response = server.get("/mapcode/codes/10,10").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let json: Value = response.json();
    assert_error(&json, "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("lat=10"));
}

#[tokio::test]
async fn test_decode_with_territory_prefix() {
    let server = create_test_server();

    let response = server.get("/mapcode/coords/LUX%20JL0.KP").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert!((json["latDeg"].as_f64().unwrap() - 50.141706).abs() < 1e-3);
    assert!((json["lonDeg"].as_f64().unwrap() - 6.135864).abs() < 1e-3);
    assert!(json.get("rectangle").is_none());
}

#[tokio::test]
async fn test_decode_with_context_and_rectangle() {
    let server = create_test_server();

    let response = server
        .get("/mapcode/coords/JL0.KP?context=LU&include=rectangle")
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert!(json["rectangle"]["southWest"]["latDeg"].is_number());
}

#[tokio::test]
async fn test_decode_round_trip() {
    let server = create_test_server();

    let encoded: Value = server
        .get("/mapcode/codes/50.141706,6.135864/international")
        .await
        .json();
    let code = encoded["mapcode"].as_str().unwrap();

    let decoded: Value = server
        .get(&format!("/mapcode/coords/{}?include=rectangle", code))
        .await
        .json();
    let lat = decoded["latDeg"].as_f64().unwrap();
    let lon = decoded["lonDeg"].as_f64().unwrap();
    let sw = &decoded["rectangle"]["southWest"];
    let ne = &decoded["rectangle"]["northEast"];
    assert!(sw["latDeg"].as_f64().unwrap() <= 50.141706);
    assert!(ne["latDeg"].as_f64().unwrap() >= 50.141706);
    assert!((lat - 50.141706).abs() < 1e-3);
    assert!((lon - 6.135864).abs() < 1e-3);
}

#[tokio::test]
async fn test_decode_errors() {
    let server = create_test_server();

    let response = server.get("/mapcode/coords/JL0.KP?territory=LUX").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "INVALID_USAGE");

    let response = server.get("/mapcode/coords/JL0.KP?context=xyz").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "INVALID_ENUM");

    let response = server.get("/mapcode/coords/ATLANTIS%20JL0.KP").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_error(&response.json(), "UNKNOWN_TERRITORY");

    let response = server.get("/mapcode/coords/ZZ.ZZ").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_error(&response.json(), "NOT_FOUND");
}

#[tokio::test]
async fn test_territories_list() {
    let server = create_test_server();

    let response = server.get("/mapcode/territories?offset=0&count=3").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["territories"].as_array().unwrap().len(), 3);
    assert_eq!(json["territories"][0]["alphaCode"], "AAA");
    assert_eq!(json["total"], Territory::count());

    let response = server.get("/mapcode/territories?offset=-1&count=1").await;
    let json: Value = response.json();
    assert_eq!(json["territories"].as_array().unwrap().len(), 1);

    let response = server.get("/mapcode/territories?count=-1").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "OUT_OF_RANGE");
}

#[tokio::test]
async fn test_territory_with_context() {
    let server = create_test_server();

    let response = server.get("/mapcode/territories/IN?context=US").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["alphaCode"], "US-IN");
    assert_eq!(json["parentTerritory"], "USA");
    assert_eq!(json["alphaCodeMinimalUnambiguous"], "US-IN");

    let response = server.get("/mapcode/territories/IN").await;
    let json: Value = response.json();
    assert_eq!(json["alphaCode"], "IND");
    assert!(json["alphabets"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a["name"] == "DEVANAGARI"));

    let response = server.get("/mapcode/territories/in?context=xyz").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "INVALID_ENUM");
}

#[tokio::test]
async fn test_alphabets_pagination() {
    let server = create_test_server();

    let response = server.get("/mapcode/alphabets?offset=-1&count=1").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["total"], 14);
    assert_eq!(json["alphabets"][0]["name"], "TIBETAN");
    assert_eq!(json["alphabets"].as_array().unwrap().len(), 1);

    let json: Value = server.get("/mapcode/alphabets?offset=1&count=1").await.json();
    assert_eq!(json["alphabets"][0]["name"], "GREEK");

    let json: Value = server.get("/mapcode/alphabets?count=0").await.json();
    assert!(json["alphabets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_alphabet_lookup() {
    let server = create_test_server();

    let response = server.get("/mapcode/alphabets/cyrillic").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["name"], "CYRILLIC");

    let response = server.get("/mapcode/alphabets/runic").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "INVALID_ENUM");
}

#[tokio::test]
async fn test_health_and_version() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].as_str().is_some());

    let json: Value = server.get("/mapcode/version").await.json();
    assert_eq!(json["service"], "mapcoder-service");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let server = create_test_server();

    let json: Value = server.get("/metrics").await.json();
    assert_eq!(json["requests"], 0);

    server.get("/mapcode/codes/50.141706,6.135864?client=ios").await;
    server.get("/mapcode/codes/50.141706,6.135864/local").await;
    server.get("/mapcode/alphabets?client=web").await;

    let json: Value = server.get("/metrics").await.json();
    assert_eq!(json["requests"], 3);
    assert_eq!(json["byKind"]["encode-all"], 1);
    assert_eq!(json["byKind"]["encode-local"], 1);
    assert_eq!(json["byClient"]["ios"]["encode-all"], 1);
    assert_eq!(json["byClient"]["web"]["alphabets"], 1);
}

#[tokio::test]
async fn test_openapi_document() {
    let server = create_test_server();

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert!(json["paths"].get("/mapcode/codes/{latlon}").is_some());
    assert!(json["paths"].get("/mapcode/coords/{code}").is_some());
}

#[tokio::test]
async fn test_service_from_table_file() {
    let json = r#"{
        "entries": [{
            "point": { "latDeg": 52.376514, "lonDeg": 4.908542 },
            "mapcodes": [
                { "code": "49.4V", "territory": "NLD" },
                { "code": "VHXGB.1J9J", "territory": "AAA" }
            ]
        }]
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let mapcode_service = MapcodeServiceBuilder::new()
        .table(file.path())
        .build()
        .unwrap();
    let server = TestServer::new(router(Arc::new(AppState { mapcode_service }))).unwrap();

    let json: Value = server
        .get("/mapcode/codes/52.376514,4.908542/local")
        .await
        .json();
    assert_eq!(json["mapcode"], "49.4V");
    assert_eq!(json["territory"], "NLD");
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_default_log_filter_includes_library_events() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let service = MapcodeService::new(fixture_codec());
    tracing::subscriber::with_default(subscriber, || {
        service
            .encode(&EncodeRequest::new("50.141706,6.135864"))
            .unwrap();
    });

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("Encoded coordinate"), "log output: {}", output);
    assert!(output.contains("mapcoder::service"));
}
