use async_trait::async_trait;
use dme_core::Transmitter;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::TransmitError;

/// Status reported when the request never produced an HTTP response
/// (connect failure, timeout, ...).
pub const TRANSPORT_FAILURE_STATUS: u16 = 500;

/// Posts order JSON to the intake endpoint.
pub struct HttpTransmitter {
    client: Client,
    endpoint: Url,
}

impl HttpTransmitter {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TransmitError> {
        let endpoint = Url::parse(endpoint).map_err(|e| TransmitError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(TransmitError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme {}", endpoint.scheme()),
            });
        }

        info!("Creating HttpTransmitter for {endpoint}");
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dme/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn try_send(&self, json: &str) -> Result<u16, reqwest::Error> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(json.to_owned())
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}

#[async_trait]
impl Transmitter for HttpTransmitter {
    async fn send(&self, json: &str) -> u16 {
        debug!("POST {} ({} bytes)", self.endpoint, json.len());

        match self.try_send(json).await {
            Ok(status) => {
                info!("Received status {status} from {}", self.endpoint);
                status
            }
            Err(e) => {
                warn!("Request to {} failed: {e}", self.endpoint);
                TRANSPORT_FAILURE_STATUS
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_endpoint() {
        let result = HttpTransmitter::new("alert-api.com/DrExtract", Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(TransmitError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = HttpTransmitter::new("file:///tmp/orders", Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(TransmitError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn accepts_default_endpoint() {
        let transmitter =
            HttpTransmitter::new(dme_core::DEFAULT_ENDPOINT, Duration::from_secs(30));
        assert!(matches!(
            transmitter.as_ref().map(|t| t.endpoint().as_str()),
            Ok("https://alert-api.com/DrExtract")
        ));
    }
}
