/// HTTP surface of the air-quality dashboard service.
///
/// One handler per upstream source, each following the same contract:
/// extract query parameters with documented defaults, check credential
/// preconditions before any outbound call, invoke the upstream adapter at
/// most once, optionally reshape, and return JSON. Failures collapse to
/// `{error, details?}` — 500 for configuration and upstream failures, 502
/// when the upstream response violates its own contract.
///
/// Handlers share no mutable state; concurrent requests are fully
/// independent.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, ServiceConfig};
use crate::ingest::client::Fetch;
use crate::ingest::{nasa, openweather};
use crate::model::UpstreamError;
use crate::sources::{self, Credential};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// State injected into every handler: the immutable configuration and the
/// upstream transport. The transport is a trait object so tests can swap in
/// a stub that records calls.
#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub fetch: Arc<dyn Fetch>,
}

/// Builds the service router. The dashboard dev server calls cross-origin,
/// so CORS is left permissive — this API serves public read-only data.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/air-quality", get(air_quality))
        .route("/api/nasa/events", get(nasa_events))
        .route("/api/nasa/earth", get(nasa_earth))
        .route("/api/nasa/tempo", get(nasa_tempo))
        .route("/api/nasa/earth/temperature", get(nasa_temperature))
        .route("/api/nasa/space-weather", get(nasa_space_weather))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Error surfacing
// ---------------------------------------------------------------------------

/// A request-scoped failure, rendered as `{error, details?}`.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<String>,
}

impl ApiError {
    fn status_for(err: &UpstreamError) -> StatusCode {
        match err {
            // Upstream broke its own contract; our configuration and the
            // network are fine.
            UpstreamError::ContractViolation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Surfaces the upstream error message directly as `error`.
    fn from_upstream(err: UpstreamError) -> Self {
        ApiError {
            status: Self::status_for(&err),
            error: err.to_string(),
            details: None,
        }
    }

    /// Surfaces a fixed operator-facing message with the upstream error as
    /// `details`, matching the imagery and TEMPO failure shapes.
    fn with_context(context: &str, err: UpstreamError) -> Self {
        ApiError {
            status: Self::status_for(&err),
            error: context.to_string(),
            details: Some(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = %self.status,
            error = %self.error,
            details = self.details.as_deref().unwrap_or(""),
            "request failed"
        );
        let mut body = json!({ "error": self.error });
        if let Some(details) = self.details {
            body["details"] = json!(details);
        }
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Coordinates for the air-quality endpoint, defaulting to Mumbai.
#[derive(Debug, Deserialize)]
struct CoordQuery {
    #[serde(default = "default_lat")]
    lat: f64,
    #[serde(default = "default_lon")]
    lon: f64,
}

fn default_lat() -> f64 {
    DEFAULT_LATITUDE
}

fn default_lon() -> f64 {
    DEFAULT_LONGITUDE
}

/// Coordinates for the POWER temperature endpoint, defaulting to (0, 0).
#[derive(Debug, Deserialize)]
struct TemperatureQuery {
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

/// Date for the imagery endpoint, defaulting to today (ISO-8601).
#[derive(Debug, Deserialize)]
struct DateQuery {
    #[serde(default = "nasa::today_iso")]
    date: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Process-wide status: which credentials are present and which routes are
/// served. Performs no outbound calls and never fails.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "apiKeys": {
            "nasa": state.config.credential_status(Credential::Nasa),
            "openWeather": state.config.credential_status(Credential::OpenWeather),
        },
        "endpoints": sources::all_routes(),
    }))
}

/// Current air pollution for a coordinate pair, reshaped from the first
/// list element of the OpenWeather response.
async fn air_quality(
    State(state): State<AppState>,
    Query(query): Query<CoordQuery>,
) -> Result<Json<openweather::AirQualitySummary>, ApiError> {
    // Credential precondition: fail before any outbound call.
    let api_key = state
        .config
        .require_openweather_key()
        .map_err(ApiError::from_upstream)?;

    let url = openweather::build_air_pollution_url(query.lat, query.lon, api_key);
    let raw = state
        .fetch
        .get_json(&url)
        .await
        .map_err(ApiError::from_upstream)?;

    let summary = openweather::reshape_air_quality(raw, query.lat, query.lon)
        .map_err(ApiError::from_upstream)?;
    Ok(Json(summary))
}

/// EONET natural event list, proxied unmodified.
async fn nasa_events(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let url = nasa::build_eonet_url(&state.config.nasa_key);
    let raw = state
        .fetch
        .get_json(&url)
        .await
        .map_err(ApiError::from_upstream)?;
    Ok(Json(raw))
}

/// GIBS true-color imagery link for a date. Purely a URL constructor — no
/// outbound call is made.
async fn nasa_earth(Query(query): Query<DateQuery>) -> Json<nasa::EarthImagery> {
    Json(nasa::earth_imagery_for_date(&query.date))
}

/// Raw passthrough from the secondary local TEMPO service.
async fn nasa_tempo(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let url = nasa::build_tempo_url(&state.config.tempo_base_url);
    let raw = state
        .fetch
        .get_json(&url)
        .await
        .map_err(|e| ApiError::with_context("Failed to fetch TEMPO data", e))?;
    Ok(Json(raw))
}

/// POWER daily temperature series for a coordinate pair, proxied
/// unmodified. Covers January 1 of the current year through today.
async fn nasa_temperature(
    State(state): State<AppState>,
    Query(query): Query<TemperatureQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (start, end) = nasa::power_date_range(Utc::now().date_naive());
    let url = nasa::build_power_url(query.lat, query.lon, start, end);
    let raw = state
        .fetch
        .get_json(&url)
        .await
        .map_err(ApiError::from_upstream)?;
    Ok(Json(raw))
}

/// DONKI space weather notifications, proxied unmodified.
async fn nasa_space_weather(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let url = nasa::build_donki_url(&state.config.nasa_key);
    let raw = state
        .fetch
        .get_json(&url)
        .await
        .map_err(ApiError::from_upstream)?;
    Ok(Json(raw))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PORT, DEFAULT_TEMPO_URL, NASA_DEMO_KEY};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Stub transport: records every requested URL and returns a canned
    /// JSON value. Used to assert on outbound call counts.
    struct StubFetch {
        calls: Mutex<Vec<String>>,
        response: serde_json::Value,
    }

    impl StubFetch {
        fn returning(response: serde_json::Value) -> Arc<Self> {
            Arc::new(StubFetch {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_url(&self) -> String {
            self.calls.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl Fetch for StubFetch {
        async fn get_json(&self, url: &str) -> Result<serde_json::Value, UpstreamError> {
            self.calls.lock().unwrap().push(url.to_string());
            Ok(self.response.clone())
        }
    }

    /// Stub transport that always fails with the given HTTP status.
    struct FailingFetch(u16);

    #[async_trait]
    impl Fetch for FailingFetch {
        async fn get_json(&self, _url: &str) -> Result<serde_json::Value, UpstreamError> {
            Err(UpstreamError::Http(self.0))
        }
    }

    fn state_with(fetch: Arc<dyn Fetch>, openweather_key: Option<&str>) -> AppState {
        AppState {
            config: ServiceConfig {
                openweather_key: openweather_key.map(String::from),
                nasa_key: NASA_DEMO_KEY.to_string(),
                nasa_key_configured: false,
                port: DEFAULT_PORT,
                tempo_base_url: DEFAULT_TEMPO_URL.to_string(),
            },
            fetch,
        }
    }

    fn openweather_response() -> serde_json::Value {
        json!({
            "list": [{
                "main": {"aqi": 3},
                "components": {
                    "co": 200.0, "no2": 10.0, "o3": 50.0,
                    "pm2_5": 12.0, "pm10": 20.0
                },
                "dt": 1700000000
            }]
        })
    }

    // --- /health ------------------------------------------------------------

    #[tokio::test]
    async fn test_health_lists_exactly_the_six_documented_endpoints() {
        let stub = StubFetch::returning(json!({}));
        let Json(body) = health(State(state_with(stub.clone(), None))).await;

        assert_eq!(body["status"], "ok");
        let endpoints = body["endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 6);
        for route in sources::all_routes() {
            assert!(
                endpoints.iter().any(|e| e == route),
                "/health should list '{}'",
                route
            );
        }
        // Health is pure status reporting.
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_health_reports_credentials_regardless_of_configuration() {
        let stub = StubFetch::returning(json!({}));
        let Json(without) = health(State(state_with(stub.clone(), None))).await;
        assert_eq!(without["apiKeys"]["openWeather"], "missing");
        assert_eq!(without["apiKeys"]["nasa"], "missing");

        let Json(with) = health(State(state_with(stub, Some("key")))).await;
        assert_eq!(with["apiKeys"]["openWeather"], "configured");
        assert_eq!(with["endpoints"].as_array().unwrap().len(), 6);
    }

    // --- /api/air-quality ---------------------------------------------------

    #[tokio::test]
    async fn test_air_quality_without_credential_makes_zero_outbound_calls() {
        let stub = StubFetch::returning(openweather_response());
        let state = state_with(stub.clone(), None);

        let err = air_quality(
            State(state),
            Query(CoordQuery {
                lat: default_lat(),
                lon: default_lon(),
            }),
        )
        .await
        .expect_err("missing credential must fail");

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error, "OpenWeather API key not configured");
        assert_eq!(stub.call_count(), 0, "no outbound call may be made");
    }

    #[tokio::test]
    async fn test_air_quality_reshapes_stubbed_upstream_response() {
        let stub = StubFetch::returning(openweather_response());
        let state = state_with(stub.clone(), Some("test-key"));

        let Json(summary) = air_quality(
            State(state),
            Query(CoordQuery {
                lat: default_lat(),
                lon: default_lon(),
            }),
        )
        .await
        .expect("stubbed upstream should succeed");

        assert_eq!(summary.aqi, 3);
        assert_eq!(summary.qualitative_aqi, "Moderate");
        assert_eq!(summary.timestamp, 1_700_000_000_000);
        assert_eq!(stub.call_count(), 1, "exactly one outbound call");
        assert!(stub.last_url().contains("appid=test-key"));
        assert!(stub.last_url().contains("lat=19.076"));
    }

    #[tokio::test]
    async fn test_air_quality_empty_upstream_list_returns_clean_502() {
        // Regression guard: the upstream list may be empty; that must be a
        // clean contract-violation response, never a crash.
        let stub = StubFetch::returning(json!({"list": []}));
        let state = state_with(stub, Some("test-key"));

        let err = air_quality(
            State(state),
            Query(CoordQuery { lat: 0.0, lon: 0.0 }),
        )
        .await
        .expect_err("empty list must fail");

        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert!(err.error.contains("empty list"));
    }

    #[tokio::test]
    async fn test_air_quality_upstream_http_failure_maps_to_500() {
        let state = state_with(Arc::new(FailingFetch(503)), Some("test-key"));
        let err = air_quality(
            State(state),
            Query(CoordQuery { lat: 0.0, lon: 0.0 }),
        )
        .await
        .expect_err("failing upstream must fail");

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error, "HTTP error: 503");
    }

    // --- /api/nasa/earth ----------------------------------------------------

    #[tokio::test]
    async fn test_earth_imagery_is_a_pure_url_constructor() {
        let Json(imagery) = nasa_earth(Query(DateQuery {
            date: "2025-10-04".to_string(),
        }))
        .await;

        assert!(imagery.image_url.contains("2025-10-04"));
        assert_eq!(imagery.source, nasa::GIBS_SOURCE);
        // No transport is even reachable from this handler; the source
        // registry documents it as the one local constructor.
        assert!(!sources::find_source("/api/nasa/earth").unwrap().makes_outbound_call);
    }

    // --- passthrough endpoints ----------------------------------------------

    #[tokio::test]
    async fn test_events_passthrough_returns_upstream_json_unmodified() {
        let upstream = json!({"title": "EONET Events", "events": [{"id": "EONET_1"}]});
        let stub = StubFetch::returning(upstream.clone());
        let state = state_with(stub.clone(), None);

        let Json(body) = nasa_events(State(state)).await.unwrap();
        assert_eq!(body, upstream);
        assert!(stub.last_url().starts_with("https://eonet.gsfc.nasa.gov/"));
        assert!(stub.last_url().contains("api_key=DEMO_KEY"));
    }

    #[tokio::test]
    async fn test_tempo_failure_surfaces_context_and_details() {
        let state = state_with(Arc::new(FailingFetch(500)), None);
        let err = nasa_tempo(State(state)).await.expect_err("must fail");

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error, "Failed to fetch TEMPO data");
        assert_eq!(err.details.as_deref(), Some("HTTP error: 500"));
    }

    #[tokio::test]
    async fn test_tempo_targets_the_configured_local_service() {
        let stub = StubFetch::returning(json!({"no2_column": []}));
        let state = state_with(stub.clone(), None);

        nasa_tempo(State(state)).await.unwrap();
        assert_eq!(stub.last_url(), "http://localhost:5000/tempo/data");
    }

    #[tokio::test]
    async fn test_temperature_defaults_to_origin_coordinates() {
        let stub = StubFetch::returning(json!({"properties": {}}));
        let state = state_with(stub.clone(), None);

        nasa_temperature(
            State(state),
            Query(TemperatureQuery { lat: 0.0, lon: 0.0 }),
        )
        .await
        .unwrap();

        assert!(stub.last_url().contains("longitude=0&latitude=0"));
        assert!(stub.last_url().contains("parameters=T2M"));
    }

    #[tokio::test]
    async fn test_space_weather_uses_donki_notifications() {
        let stub = StubFetch::returning(json!([{"messageType": "Report"}]));
        let state = state_with(stub.clone(), None);

        let Json(body) = nasa_space_weather(State(state)).await.unwrap();
        assert!(body.is_array());
        assert!(stub.last_url().contains("/DONKI/notifications"));
    }

    // --- query defaulting ---------------------------------------------------

    #[test]
    fn test_coord_query_defaults_to_mumbai() {
        let uri = "http://localhost/api/air-quality".parse().unwrap();
        let Query(query) = Query::<CoordQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.lat, DEFAULT_LATITUDE);
        assert_eq!(query.lon, DEFAULT_LONGITUDE);
    }

    #[test]
    fn test_coord_query_accepts_explicit_coordinates() {
        let uri = "http://localhost/api/air-quality?lat=40.7128&lon=-74.006"
            .parse()
            .unwrap();
        let Query(query) = Query::<CoordQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.lat, 40.7128);
        assert_eq!(query.lon, -74.006);
    }

    #[test]
    fn test_temperature_query_defaults_to_zero() {
        let uri = "http://localhost/api/nasa/earth/temperature".parse().unwrap();
        let Query(query) = Query::<TemperatureQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.lat, 0.0);
        assert_eq!(query.lon, 0.0);
    }

    #[test]
    fn test_date_query_defaults_to_today() {
        let uri = "http://localhost/api/nasa/earth".parse().unwrap();
        let Query(query) = Query::<DateQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.date, nasa::today_iso());
    }

    // --- error rendering ----------------------------------------------------

    #[test]
    fn test_contract_violation_maps_to_bad_gateway() {
        let err = ApiError::from_upstream(UpstreamError::ContractViolation("x".into()));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_other_upstream_errors_map_to_internal_server_error() {
        for upstream in [
            UpstreamError::MissingCredential("OpenWeather"),
            UpstreamError::Http(404),
            UpstreamError::Transport("connection refused".into()),
            UpstreamError::Parse("bad json".into()),
        ] {
            let err = ApiError::from_upstream(upstream);
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
