use serde::Deserialize;
use thiserror::Error;

/// Wire payload of `GET /batch_status`.
///
/// The status label stays a plain string here; the shell maps it onto the
/// core's phase enum. Counters default to zero so a sparse payload still
/// decodes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchStatus {
    pub status: String,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub current_file: u32,
    #[serde(default)]
    pub total_files: u32,
    #[serde(default)]
    pub current_filename: String,
    #[serde(default)]
    pub completed_files: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("invalid status endpoint: {0}")]
    Endpoint(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed status payload: {0}")]
    Decode(String),
    #[error("timeout")]
    Timeout,
}
