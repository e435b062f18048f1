/// NASA upstream clients: EONET, GIBS, POWER, DONKI, and the local TEMPO
/// service passthrough.
///
/// Apart from GIBS — which is a pure URL constructor and performs no
/// outbound call — these endpoints proxy the upstream JSON unmodified, so
/// this module only builds URLs. Response bodies stay opaque
/// `serde_json::Value`s all the way back to the browser.
///
/// API documentation:
/// - EONET: https://eonet.gsfc.nasa.gov/docs/v3
/// - GIBS:  https://nasa-gibs.github.io/gibs-api-docs/
/// - POWER: https://power.larc.nasa.gov/docs/services/api/
/// - DONKI: https://api.nasa.gov (DONKI section)

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

const EONET_BASE_URL: &str = "https://eonet.gsfc.nasa.gov";
const GIBS_BASE_URL: &str = "https://gibs.earthdata.nasa.gov";
const POWER_BASE_URL: &str = "https://power.larc.nasa.gov";
const DONKI_BASE_URL: &str = "https://api.nasa.gov";

/// GIBS layer served by the earth imagery endpoint.
const GIBS_LAYER: &str = "MODIS_Terra_CorrectedReflectance_TrueColor";

/// Fixed source string reported alongside every imagery link.
pub const GIBS_SOURCE: &str = "NASA GIBS (MODIS Terra True Color)";
pub const GIBS_ATTRIBUTION: &str = "NASA Earth Observatory";

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Natural event list from the Earth Observatory Natural Event Tracker.
pub fn build_eonet_url(api_key: &str) -> String {
    format!("{}/api/v3/events?api_key={}", EONET_BASE_URL, api_key)
}

/// Space weather notifications from DONKI.
pub fn build_donki_url(api_key: &str) -> String {
    format!("{}/DONKI/notifications?api_key={}", DONKI_BASE_URL, api_key)
}

/// Daily 2-meter air temperature (T2M) point series from POWER.
///
/// Dates are formatted as `YYYYMMDD` per the POWER API. Note the API takes
/// longitude before latitude.
pub fn build_power_url(lat: f64, lon: f64, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/api/temporal/daily/point?parameters=T2M&community=RE&longitude={}&latitude={}&start={}&end={}&format=JSON",
        POWER_BASE_URL,
        lon,
        lat,
        start.format("%Y%m%d"),
        end.format("%Y%m%d")
    )
}

/// The date range requested from POWER: January 1 of the current year
/// through today. Takes `today` as a parameter so tests stay deterministic.
pub fn power_date_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    // Jan 1 always exists for any year chrono can represent.
    let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    (start, today)
}

/// Data passthrough URL for the secondary local TEMPO service. Its response
/// shape is an opaque external contract, never inspected here.
pub fn build_tempo_url(base_url: &str) -> String {
    format!("{}/tempo/data", base_url.trim_end_matches('/'))
}

// ---------------------------------------------------------------------------
// GIBS earth imagery
// ---------------------------------------------------------------------------

/// The earth imagery response: a constructed tile URL plus static
/// attribution metadata. Producing this makes no outbound call.
#[derive(Debug, Serialize)]
pub struct EarthImagery {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub date: String,
    pub source: &'static str,
    pub attribution: &'static str,
    pub resolution: &'static str,
    pub note: &'static str,
}

/// Builds the imagery link for an ISO-8601 date (`YYYY-MM-DD`).
pub fn earth_imagery_for_date(date: &str) -> EarthImagery {
    let image_url = format!(
        "{}/wmts/epsg4326/best/{}/default/{}/250m/0/0/0.jpg",
        GIBS_BASE_URL, GIBS_LAYER, date
    );
    EarthImagery {
        image_url,
        date: date.to_string(),
        source: GIBS_SOURCE,
        attribution: GIBS_ATTRIBUTION,
        resolution: "250m",
        note: "This image is from the MODIS Terra satellite and shows true \
               color corrected reflectance",
    }
}

/// Today's date in the ISO-8601 form the imagery endpoint defaults to.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
