/// Process configuration for the air-quality dashboard service.
///
/// All environment access happens here, once, at startup. Handlers receive
/// the resulting `ServiceConfig` through shared state and never re-read the
/// process environment per request.

use crate::model::UpstreamError;
use crate::sources::Credential;

/// Public demo credential accepted by api.nasa.gov with tight rate limits.
/// Used when `NASA_API_KEY` is not configured.
pub const NASA_DEMO_KEY: &str = "DEMO_KEY";

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 4000;

/// Default coordinates when a request omits lat/lon: Mumbai, India.
pub const DEFAULT_LATITUDE: f64 = 19.0760;
pub const DEFAULT_LONGITUDE: f64 = 72.8777;

/// Base URL of the secondary local TEMPO service when `TEMPO_SERVICE_URL`
/// is unset. Its `/tempo/data` contract is opaque to this service.
pub const DEFAULT_TEMPO_URL: &str = "http://localhost:5000";

/// Immutable service configuration, constructed once at process start.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// OpenWeather credential. `None` means air-quality requests fail fast
    /// with a configuration error before any outbound call.
    pub openweather_key: Option<String>,
    /// NASA credential, falling back to the public demo key.
    pub nasa_key: String,
    /// Whether `nasa_key` is a real configured credential rather than the
    /// demo fallback. Reported by `/health`.
    pub nasa_key_configured: bool,
    pub port: u16,
    pub tempo_base_url: String,
}

impl ServiceConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` before this if a `.env` file should be
    /// honored. Missing optional variables fall back to documented
    /// defaults; nothing here fails.
    pub fn from_env() -> Self {
        let openweather_key = non_empty_var("OPENWEATHER_KEY");
        let nasa_key = non_empty_var("NASA_API_KEY");
        let nasa_key_configured = nasa_key.is_some();
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        ServiceConfig {
            openweather_key,
            nasa_key: nasa_key.unwrap_or_else(|| NASA_DEMO_KEY.to_string()),
            nasa_key_configured,
            port,
            tempo_base_url: non_empty_var("TEMPO_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_TEMPO_URL.to_string()),
        }
    }

    /// Returns the OpenWeather key or the configuration error surfaced when
    /// it is absent. The air-quality handler calls this before building any
    /// upstream URL.
    pub fn require_openweather_key(&self) -> Result<&str, UpstreamError> {
        self.openweather_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential("OpenWeather"))
    }

    /// Credential presence as reported by `/health`: `"configured"` or
    /// `"missing"`.
    pub fn credential_status(&self, credential: Credential) -> &'static str {
        let present = match credential {
            Credential::Nasa => self.nasa_key_configured,
            Credential::OpenWeather => self.openweather_key.is_some(),
        };
        if present { "configured" } else { "missing" }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_keys() -> ServiceConfig {
        ServiceConfig {
            openweather_key: None,
            nasa_key: NASA_DEMO_KEY.to_string(),
            nasa_key_configured: false,
            port: DEFAULT_PORT,
            tempo_base_url: DEFAULT_TEMPO_URL.to_string(),
        }
    }

    #[test]
    fn test_missing_openweather_key_is_a_configuration_error() {
        let config = config_without_keys();
        let err = config.require_openweather_key().unwrap_err();
        assert_eq!(err, UpstreamError::MissingCredential("OpenWeather"));
        assert_eq!(err.to_string(), "OpenWeather API key not configured");
    }

    #[test]
    fn test_configured_openweather_key_is_returned() {
        let mut config = config_without_keys();
        config.openweather_key = Some("abc123".to_string());
        assert_eq!(config.require_openweather_key().unwrap(), "abc123");
    }

    #[test]
    fn test_credential_status_tracks_presence() {
        let mut config = config_without_keys();
        assert_eq!(config.credential_status(Credential::OpenWeather), "missing");
        assert_eq!(config.credential_status(Credential::Nasa), "missing");

        config.openweather_key = Some("abc123".to_string());
        config.nasa_key_configured = true;
        assert_eq!(
            config.credential_status(Credential::OpenWeather),
            "configured"
        );
        assert_eq!(config.credential_status(Credential::Nasa), "configured");
    }

    #[test]
    fn test_demo_key_counts_as_missing_for_health_reporting() {
        // The DEMO_KEY fallback lets NASA routes work out of the box, but
        // /health must still report the credential as missing.
        let config = config_without_keys();
        assert_eq!(config.nasa_key, NASA_DEMO_KEY);
        assert_eq!(config.credential_status(Credential::Nasa), "missing");
    }
}
