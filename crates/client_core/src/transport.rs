use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::{debug, warn};

use crate::{request::RequestDescriptor, response::HttpOutcome};

/// Sends a built calculation request. Failures are reported in the outcome, never as `Err`.
#[async_trait]
pub trait CalculationTransport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> HttpOutcome;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http))
    }

    /// Wraps a preconfigured client, e.g. one with custom proxy rules.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CalculationTransport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> HttpOutcome {
        debug!(method = %request.method, url = %request.url, "sending calculation request");
        let response = match self
            .http
            .request(request.method.clone(), &request.url)
            .header(CONTENT_TYPE, request.content_type)
            .json(&request.body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %request.url, "calculation service unreachable: {err}");
                return HttpOutcome::Transport(err.to_string());
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => HttpOutcome::Response { status, body },
            Err(err) => {
                warn!(status, "failed to read calculation response body: {err}");
                HttpOutcome::Transport(err.to_string())
            }
        }
    }
}
