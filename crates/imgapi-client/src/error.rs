// Error types for ImgApiClient

use bytes::Bytes;

/// Errors that can occur during imgapi client operations
///
/// Non-2xx responses are not errors: their body is handed back to the caller
/// like any other response.
#[derive(Debug, thiserror::Error)]
pub enum ImgApiError {
    /// The request could not be built or sent, or the body could not be read
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A JSON endpoint returned a body of the wrong shape
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
        body: Bytes,
    },
}

impl ImgApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ImgApiError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ImgApiError::Decode { .. })
    }

    /// Raw response body that failed to decode
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            ImgApiError::Decode { body, .. } => Some(&body[..]),
            ImgApiError::Transport(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImgApiError>;
