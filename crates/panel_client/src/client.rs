use std::time::Duration;

use async_trait::async_trait;
use ui_logging::ui_debug;
use url::Url;

use crate::{BatchStatus, StatusError};

/// Path of the status endpoint, relative to the page origin.
pub const STATUS_PATH: &str = "/batch_status";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait(?Send)]
pub trait StatusClient {
    async fn fetch_status(&self) -> Result<BatchStatus, StatusError>;
}

#[derive(Debug, Clone)]
pub struct HttpStatusClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpStatusClient {
    pub fn new(origin: &str) -> Result<Self, StatusError> {
        Self::with_settings(origin, ClientSettings::default())
    }

    pub fn with_settings(origin: &str, settings: ClientSettings) -> Result<Self, StatusError> {
        let base = Url::parse(origin).map_err(|err| StatusError::Endpoint(err.to_string()))?;
        let endpoint = base
            .join(STATUS_PATH)
            .map_err(|err| StatusError::Endpoint(err.to_string()))?;
        let client = build_client(&settings)?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(settings: &ClientSettings) -> Result<reqwest::Client, StatusError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| StatusError::Network(err.to_string()))
}

// The browser's fetch owns connection handling; the builder knobs above do
// not exist on wasm32.
#[cfg(target_arch = "wasm32")]
fn build_client(_settings: &ClientSettings) -> Result<reqwest::Client, StatusError> {
    Ok(reqwest::Client::new())
}

#[async_trait(?Send)]
impl StatusClient for HttpStatusClient {
    async fn fetch_status(&self) -> Result<BatchStatus, StatusError> {
        ui_debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::HttpStatus(status.as_u16()));
        }

        response
            .json::<BatchStatus>()
            .await
            .map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> StatusError {
    if err.is_timeout() {
        return StatusError::Timeout;
    }
    if err.is_decode() {
        return StatusError::Decode(err.to_string());
    }
    StatusError::Network(err.to_string())
}
