// Response types for the JSON endpoints

use bytes::Bytes;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::{
    endpoint::Endpoint,
    error::{ImgApiError, Result},
};

/// Response of `/ping`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pong {
    pub message: String,
}

/// Response of `/stats`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub version: String,
    /// Server uptime in seconds
    pub uptime: u64,
    /// Memory statistics snapshot of the server runtime, passed through as-is
    #[serde(default)]
    pub stats: Option<serde_json::Value>,
}

/// Decode a JSON body, keeping the raw bytes on failure
pub(crate) fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: Bytes) -> Result<T> {
    serde_json::from_slice(&body).map_err(|source| {
        warn!("Failed to decode {} response: {}", endpoint, source);
        ImgApiError::Decode {
            endpoint: endpoint.path(),
            source,
            body,
        }
    })
}
