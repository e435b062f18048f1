/// AQI classification for the air-quality dashboard service.
///
/// This module is the single source of truth for mapping a numeric Air
/// Quality Index to a category label, a display color, and a health
/// advisory. Both the backend reshaping logic and the front-end display
/// import it — nothing else is allowed to hardcode thresholds, category
/// names, colors, or advisory text.
///
/// Two incompatible AQI scales appear in this system and are kept as two
/// clearly named functions that must never be merged:
///
///   - `classify` — the EPA-style 0–500 scale used by dashboard readings
///     and forecasts.
///   - `ordinal_label` — the 1–5 ordinal scale reported by the OpenWeather
///     Air Pollution API.

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// EPA-style AQI categories, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Display label, matching EPA naming.
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

// ---------------------------------------------------------------------------
// Threshold table
// ---------------------------------------------------------------------------

/// One row of the classification table: everything derived from an AQI
/// value lives together so category, color, and advisory cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiBucket {
    /// Inclusive upper bound for this bucket. `f64::INFINITY` for the
    /// open-ended Hazardous bucket.
    pub upper_bound: f64,
    pub category: AqiCategory,
    /// Hex color token used by the dashboard gauge and markers.
    pub color: &'static str,
    pub advisory: &'static str,
}

/// The classification table, evaluated as "first upper bound >= aqi wins".
///
/// Bounds are the standard EPA breakpoints: 50, 100, 150, 200, 300, then
/// unbounded. Colors and advisory text match the dashboard display.
pub static AQI_BUCKETS: &[AqiBucket] = &[
    AqiBucket {
        upper_bound: 50.0,
        category: AqiCategory::Good,
        color: "#10b981",
        advisory: "Air quality is satisfactory. Enjoy outdoor activities!",
    },
    AqiBucket {
        upper_bound: 100.0,
        category: AqiCategory::Moderate,
        color: "#fbbf24",
        advisory: "Air quality is acceptable. Sensitive individuals should limit \
                   prolonged outdoor exertion.",
    },
    AqiBucket {
        upper_bound: 150.0,
        category: AqiCategory::UnhealthySensitive,
        color: "#f97316",
        advisory: "Members of sensitive groups may experience health effects. \
                   General public is less likely to be affected.",
    },
    AqiBucket {
        upper_bound: 200.0,
        category: AqiCategory::Unhealthy,
        color: "#ef4444",
        advisory: "Everyone may begin to experience health effects. Sensitive \
                   groups should avoid outdoor activities.",
    },
    AqiBucket {
        upper_bound: 300.0,
        category: AqiCategory::VeryUnhealthy,
        color: "#dc2626",
        advisory: "Health alert: everyone may experience serious health effects. \
                   Avoid outdoor activities.",
    },
    AqiBucket {
        upper_bound: f64::INFINITY,
        category: AqiCategory::Hazardous,
        color: "#991b1b",
        advisory: "Health warnings of emergency conditions. Everyone should \
                   remain indoors.",
    },
];

/// Classifies an AQI value on the 0–500 EPA-style scale.
///
/// Total over all finite numeric input: negative and fractional values fall
/// into the Good bucket, anything above 300 (including absurd values like
/// 10000) is Hazardous. One lookup yields category, color, and advisory
/// together — callers must never combine results from separate lookups.
pub fn classify(aqi: f64) -> &'static AqiBucket {
    AQI_BUCKETS
        .iter()
        .find(|bucket| aqi <= bucket.upper_bound)
        .unwrap_or(&AQI_BUCKETS[AQI_BUCKETS.len() - 1])
}

// ---------------------------------------------------------------------------
// OpenWeather 1–5 ordinal scale
// ---------------------------------------------------------------------------

/// Qualitative labels for the OpenWeather Air Pollution API's 1–5 AQI.
///
/// This is a different scale from the EPA 0–500 one above; the two must not
/// be conflated. Returns `None` for values outside 1–5 so an out-of-range
/// upstream value surfaces as a contract violation instead of a panic.
pub fn ordinal_label(aqi: u8) -> Option<&'static str> {
    match aqi {
        1 => Some("Good"),
        2 => Some("Fair"),
        3 => Some("Moderate"),
        4 => Some("Poor"),
        5 => Some("Very Poor"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
