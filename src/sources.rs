/// Upstream source registry for the air-quality dashboard service.
///
/// Defines the canonical list of third-party data sources this service
/// proxies, along with their routes, credential requirements, and
/// attribution. This is the single source of truth for the route list —
/// `/health` and the startup banner enumerate sources from here rather
/// than hardcoding paths.

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Which process-environment credential a source requires, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// `NASA_API_KEY` — falls back to the public `DEMO_KEY` when unset.
    Nasa,
    /// `OPENWEATHER_KEY` — no fallback; requests fail fast without it.
    OpenWeather,
}

// ---------------------------------------------------------------------------
// Source metadata
// ---------------------------------------------------------------------------

/// Metadata for a single proxied upstream source.
pub struct Source {
    /// Short name used in logs and error surfacing.
    pub name: &'static str,
    /// Route this source is served under.
    pub route: &'static str,
    /// Human-readable description of what the source provides.
    pub description: &'static str,
    /// Credential the source requires, if any.
    pub credential: Option<Credential>,
    /// Whether serving this route performs an outbound HTTP call.
    /// The GIBS imagery route is a pure URL constructor and does not.
    pub makes_outbound_call: bool,
}

/// All upstream sources proxied by this service, in the order they are
/// reported by `/health`.
pub static SOURCE_REGISTRY: &[Source] = &[
    Source {
        name: "OpenWeather Air Pollution",
        route: "/api/air-quality",
        description: "Current air pollution (AQI and pollutant components) \
                      for a coordinate pair.",
        credential: Some(Credential::OpenWeather),
        makes_outbound_call: true,
    },
    Source {
        name: "NASA EONET",
        route: "/api/nasa/events",
        description: "Earth Observatory Natural Event Tracker: active \
                      wildfires, storms, and other natural events.",
        credential: Some(Credential::Nasa),
        makes_outbound_call: true,
    },
    Source {
        name: "NASA GIBS",
        route: "/api/nasa/earth",
        description: "MODIS Terra true-color Earth imagery link for a date. \
                      Constructs the tile URL locally; no upstream call.",
        credential: None,
        makes_outbound_call: false,
    },
    Source {
        name: "NASA TEMPO",
        route: "/api/nasa/tempo",
        description: "Tropospheric pollution data proxied from the secondary \
                      local TEMPO service. Opaque passthrough.",
        credential: None,
        makes_outbound_call: true,
    },
    Source {
        name: "NASA POWER",
        route: "/api/nasa/earth/temperature",
        description: "Daily 2-meter air temperature time series for a \
                      coordinate pair.",
        credential: Some(Credential::Nasa),
        makes_outbound_call: true,
    },
    Source {
        name: "NASA DONKI",
        route: "/api/nasa/space-weather",
        description: "Space weather notifications (solar flares, CMEs, \
                      geomagnetic storms).",
        credential: Some(Credential::Nasa),
        makes_outbound_call: true,
    },
];

/// Returns the routes for all proxied sources, in registry order —
/// exactly the list `/health` reports.
pub fn all_routes() -> Vec<&'static str> {
    SOURCE_REGISTRY.iter().map(|s| s.route).collect()
}

/// Looks up a source by route. Returns `None` if not found.
pub fn find_source(route: &str) -> Option<&'static Source> {
    SOURCE_REGISTRY.iter().find(|s| s.route == route)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
