//! HTTP transport.
//!
//! One call is one `POST` with a JSON body. HTTP 200 bodies are parsed as
//! JSON; any other status becomes `ClientError::Transport` carrying the
//! status code and the raw body. No retries.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn, Instrument};

use common::errors::{ClientError, ClientResult};
use common::middleware::{request_span, AuthHeaders, RequestId, REQUEST_ID_HEADER};
use common::ClientConfig;

/// The request/response exchange behind every client call.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts `body` to `path` with the given auth headers and returns the
    /// parsed JSON of a 200 response.
    async fn post(&self, path: &str, headers: &AuthHeaders, body: Value) -> ClientResult<Value>;
}

/// `reqwest`-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport for the configured server, applying its timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, path: &str, headers: &AuthHeaders, body: Value) -> ClientResult<Value> {
        let request_id = RequestId::new();
        let span = request_span(&request_id, path);

        async move {
            let url = format!("{}{}", self.base_url, path);
            let mut request = self
                .http_client
                .post(&url)
                .header(REQUEST_ID_HEADER.clone(), request_id.as_str())
                .json(&body);
            for (name, value) in headers.iter() {
                request = request.header(name, value);
            }

            let start = Instant::now();
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            debug!(
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                "response received"
            );

            if status != StatusCode::OK {
                warn!(status = status.as_u16(), "server returned non-200 status");
                return Err(ClientError::transport(status.as_u16(), text));
            }

            serde_json::from_str(&text)
                .map_err(|e| ClientError::Decode(format!("{}: {}", e, text)))
        }
        .instrument(span)
        .await
    }
}
