//! Panel client: typed access to the batch-status endpoint.
mod client;
mod types;

pub use client::{ClientSettings, HttpStatusClient, StatusClient, STATUS_PATH};
pub use types::{BatchStatus, StatusError};
