/// Sample datasets for the dashboard views.
///
/// The front-end renders these when live data is unavailable (no upstream
/// call has completed yet, or no credential is configured). Forecast
/// samples are built through `ForecastPoint::for_date`, so their category
/// and advisory text are derived from the classification table and can
/// never drift from what the gauge displays.

use chrono::{Duration, NaiveDate, Utc};
use std::collections::BTreeMap;

use crate::model::{AirQualityReading, ForecastPoint, GlobalMarker, OceanReading};

// ---------------------------------------------------------------------------
// Air quality readings
// ---------------------------------------------------------------------------

/// Sample city readings spanning three classification buckets.
pub fn air_quality_readings() -> Vec<AirQualityReading> {
    let observed_at = Utc::now();
    vec![
        reading("Kochi, India", 9.9312, 76.2673, 142.0, &[
            ("pm2_5", 52.4),
            ("pm10", 85.2),
            ("no2", 45.8),
            ("o3", 68.3),
            ("co", 1.2),
        ], observed_at),
        reading("New York, USA", 40.7128, -74.0060, 68.0, &[
            ("pm2_5", 28.4),
            ("pm10", 42.2),
            ("no2", 35.8),
            ("o3", 48.3),
            ("co", 0.8),
        ], observed_at),
        reading("Tokyo, Japan", 35.6762, 139.6503, 45.0, &[
            ("pm2_5", 15.4),
            ("pm10", 22.2),
            ("no2", 25.8),
            ("o3", 38.3),
            ("co", 0.5),
        ], observed_at),
    ]
}

fn reading(
    location: &str,
    latitude: f64,
    longitude: f64,
    aqi: f64,
    pollutants: &[(&str, f64)],
    observed_at: chrono::DateTime<Utc>,
) -> AirQualityReading {
    AirQualityReading {
        location: location.to_string(),
        latitude,
        longitude,
        aqi,
        pollutants: pollutants
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect::<BTreeMap<_, _>>(),
        observed_at,
    }
}

// ---------------------------------------------------------------------------
// Forecast
// ---------------------------------------------------------------------------

/// Three-day sample forecast starting the day after `today`. Category and
/// advisory come from the classification table, not from literals.
pub fn forecast_from(today: NaiveDate) -> Vec<ForecastPoint> {
    [155.0, 128.0, 95.0]
        .iter()
        .enumerate()
        .map(|(i, &aqi_value)| {
            ForecastPoint::for_date(today + Duration::days(i as i64 + 1), aqi_value)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ocean readings
// ---------------------------------------------------------------------------

pub fn ocean_readings() -> Vec<OceanReading> {
    vec![
        OceanReading {
            location: "Arabian Sea".to_string(),
            latitude: 15.0,
            longitude: 65.0,
            temperature_c: 28.5,
            salinity_psu: 36.2,
            ph_level: 8.05,
            wave_height_m: 2.3,
            pollution_level: "Medium",
        },
        OceanReading {
            location: "Pacific Ocean".to_string(),
            latitude: 20.0,
            longitude: -155.0,
            temperature_c: 26.8,
            salinity_psu: 35.8,
            ph_level: 8.12,
            wave_height_m: 3.1,
            pollution_level: "Low",
        },
        OceanReading {
            location: "Atlantic Ocean".to_string(),
            latitude: 25.0,
            longitude: -70.0,
            temperature_c: 27.2,
            salinity_psu: 36.5,
            ph_level: 8.08,
            wave_height_m: 2.8,
            pollution_level: "Low",
        },
    ]
}

// ---------------------------------------------------------------------------
// Global markers
// ---------------------------------------------------------------------------

pub fn global_markers() -> Vec<GlobalMarker> {
    vec![
        marker("India", 20.5937, 78.9629, 142.0, 2.8, 32.0, "Good"),
        marker("USA", 37.0902, -95.7129, 68.0, 2.2, 22.0, "Excellent"),
        marker("China", 35.8617, 104.1954, 185.0, 3.2, 28.0, "Good"),
        marker("Brazil", -14.2350, -51.9253, 55.0, 1.8, 26.0, "Good"),
        marker("Japan", 36.2048, 138.2529, 45.0, 2.0, 20.0, "Excellent"),
        marker("Germany", 51.1657, 10.4515, 52.0, 2.1, 18.0, "Good"),
        marker("Australia", -25.2744, 133.7751, 38.0, 1.9, 24.0, "Excellent"),
        marker("South Africa", -30.5595, 22.9375, 62.0, 2.3, 21.0, "Good"),
    ]
}

fn marker(
    country: &str,
    latitude: f64,
    longitude: f64,
    aqi: f64,
    co2_ppm: f64,
    temperature_c: f64,
    data_quality: &'static str,
) -> GlobalMarker {
    GlobalMarker {
        country: country.to_string(),
        latitude,
        longitude,
        aqi,
        co2_ppm,
        temperature_c,
        data_quality,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
