/// OpenWeather Air Pollution API client.
///
/// Retrieves the current air pollution snapshot (1–5 ordinal AQI plus
/// pollutant component concentrations) for a coordinate pair and flattens
/// the first list element into the shape the dashboard consumes.
///
/// API documentation: https://openweathermap.org/api/air-pollution

use serde::{Deserialize, Serialize};

use crate::aqi;
use crate::model::UpstreamError;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the air pollution request URL for a coordinate pair.
pub fn build_air_pollution_url(lat: f64, lon: f64, api_key: &str) -> String {
    format!(
        "{}/data/2.5/air_pollution?lat={}&lon={}&appid={}",
        OPENWEATHER_BASE_URL, lat, lon, api_key
    )
}

// ---------------------------------------------------------------------------
// API response structures
// ---------------------------------------------------------------------------

/// Top-level air pollution response. The `list` array nominally holds one
/// element for a current-conditions query, but must never be trusted to.
#[derive(Debug, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AirPollutionIndex,
    pub components: PollutantComponents,
    /// Observation time, Unix seconds.
    pub dt: i64,
}

/// OpenWeather's qualitative index on its own 1–5 scale.
#[derive(Debug, Deserialize)]
pub struct AirPollutionIndex {
    pub aqi: u8,
}

/// Pollutant concentrations, µg/m³. Field names match both the upstream
/// response and the flattened output.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollutantComponents {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub pm2_5: f64,
    pub pm10: f64,
}

// ---------------------------------------------------------------------------
// Flattened output
// ---------------------------------------------------------------------------

/// The reshaped air-quality object returned to the dashboard.
#[derive(Debug, Serialize)]
pub struct AirQualitySummary {
    pub aqi: u8,
    #[serde(rename = "qualitativeAqi")]
    pub qualitative_aqi: &'static str,
    pub components: PollutantComponents,
    pub location: Coordinates,
    /// Observation time, Unix milliseconds.
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Flattens the first element of an air pollution response.
///
/// Validates upstream shape before any field access: an empty `list` or an
/// out-of-range ordinal AQI is a contract violation, not a panic. The `dt`
/// field is converted from seconds to milliseconds for the dashboard.
pub fn reshape_air_quality(
    raw: serde_json::Value,
    lat: f64,
    lon: f64,
) -> Result<AirQualitySummary, UpstreamError> {
    let response: AirPollutionResponse =
        serde_json::from_value(raw).map_err(|e| UpstreamError::Parse(e.to_string()))?;

    let entry = response.list.into_iter().next().ok_or_else(|| {
        UpstreamError::ContractViolation(
            "air pollution response contained an empty list".to_string(),
        )
    })?;

    let qualitative_aqi = aqi::ordinal_label(entry.main.aqi).ok_or_else(|| {
        UpstreamError::ContractViolation(format!(
            "ordinal AQI {} outside the 1-5 scale",
            entry.main.aqi
        ))
    })?;

    Ok(AirQualitySummary {
        aqi: entry.main.aqi,
        qualitative_aqi,
        components: entry.components,
        location: Coordinates { lat, lon },
        timestamp: entry.dt * 1000,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
