/// Upstream HTTP client adapter.
///
/// Every proxy handler performs at most one outbound GET through this
/// adapter. There is no retry, no caching, and no state across calls —
/// concurrent requests are fully independent. The `Fetch` trait is the seam
/// that lets handler tests substitute a stub transport and assert on call
/// counts without touching the network.

use async_trait::async_trait;
use std::time::Duration;

use crate::model::UpstreamError;

/// Explicit upstream timeout. The platform default (none) is unacceptable
/// for a request-scoped proxy; ten seconds matches what we tolerate when
/// verifying upstream sources.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// One-shot JSON fetch against an upstream URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Performs exactly one HTTP GET and returns the parsed JSON body.
    ///
    /// Non-2xx responses map to `UpstreamError::Http`, network failures to
    /// `UpstreamError::Transport`, and unparseable bodies to
    /// `UpstreamError::Parse`.
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, UpstreamError>;
}

/// Production adapter wrapping a shared `reqwest::Client`.
///
/// `reqwest::Client` is internally reference-counted, so this type is cheap
/// to clone and safe to share across concurrent handlers.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        Ok(UpstreamClient { client })
    }
}

#[async_trait]
impl Fetch for UpstreamClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, UpstreamError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction_succeeds() {
        assert!(UpstreamClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_transport_error() {
        // Reserved TEST-NET-1 address; connection fails without leaving the
        // machine in any sane network configuration.
        let client = UpstreamClient::new().unwrap();
        let err = client
            .get_json("http://192.0.2.1:9/nowhere")
            .await
            .unwrap_err();
        assert!(
            matches!(err, UpstreamError::Transport(_)),
            "expected Transport error, got {:?}",
            err
        );
    }
}
