/// Core data types for the air-quality dashboard service.
///
/// This module defines the shared domain model imported by all other
/// modules. It contains no I/O — only types, the error taxonomy, and the
/// constructors that keep derived fields consistent with the AQI
/// classification table.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aqi;

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A single air-quality observation for one location.
///
/// `aqi` is on the EPA-style 0–500 scale (nominally; unbounded upward).
/// Category, color, and advisory are never stored here — they are pure
/// derived functions of `aqi` via `aqi::classify`, so they can never drift
/// from the threshold table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityReading {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: f64,
    /// Pollutant name -> concentration in µg/m³.
    pub pollutants: BTreeMap<String, f64>,
    pub observed_at: DateTime<Utc>,
}

impl AirQualityReading {
    /// The classification bucket for this reading. One lookup yields
    /// category, color, and advisory together.
    pub fn bucket(&self) -> &'static aqi::AqiBucket {
        aqi::classify(self.aqi)
    }
}

/// A projected AQI value for a future date.
///
/// Construct only through `ForecastPoint::for_date` so that `category` and
/// `advisory` always come from the same classification lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub aqi: f64,
    pub category: &'static str,
    pub advisory: &'static str,
}

impl ForecastPoint {
    pub fn for_date(date: NaiveDate, aqi_value: f64) -> Self {
        let bucket = aqi::classify(aqi_value);
        ForecastPoint {
            date,
            aqi: aqi_value,
            category: bucket.category.label(),
            advisory: bucket.advisory,
        }
    }
}

// ---------------------------------------------------------------------------
// Display-only snapshots
// ---------------------------------------------------------------------------

/// Ocean conditions snapshot rendered by the ocean dashboard view.
/// No derived invariants beyond field presence; request-scoped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OceanReading {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub salinity_psu: f64,
    pub ph_level: f64,
    pub wave_height_m: f64,
    pub pollution_level: &'static str,
}

/// A marker on the global view: one country-level snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalMarker {
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: f64,
    pub co2_ppm: f64,
    pub temperature_c: f64,
    pub data_quality: &'static str,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when proxying an upstream data source.
///
/// All variants are request-scoped; none are fatal to the process, and no
/// error is ever retried.
#[derive(Debug, PartialEq)]
pub enum UpstreamError {
    /// A required API credential is absent from the configuration.
    /// Surfaced before any outbound call is made.
    MissingCredential(&'static str),
    /// Non-2xx HTTP response from the upstream service.
    Http(u16),
    /// Network-level failure reaching the upstream service.
    Transport(String),
    /// The response body could not be deserialized as JSON.
    Parse(String),
    /// Upstream JSON was syntactically valid but missing an expected shape
    /// (e.g. an empty list where one element was required).
    ContractViolation(String),
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamError::MissingCredential(name) => {
                write!(f, "{} API key not configured", name)
            }
            UpstreamError::Http(code) => write!(f, "HTTP error: {}", code),
            UpstreamError::Transport(msg) => write!(f, "Request failed: {}", msg),
            UpstreamError::Parse(msg) => write!(f, "Parse error: {}", msg),
            UpstreamError::ContractViolation(msg) => {
                write!(f, "Upstream contract violation: {}", msg)
            }
        }
    }
}

impl std::error::Error for UpstreamError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
