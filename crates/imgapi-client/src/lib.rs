//! imgapi-client: HTTP client for the imgapi image generation service
//!
//! Every endpoint is a GET with a few query parameters. `/ping` and `/stats`
//! return JSON; every other endpoint returns raw image bytes, which are handed
//! back untouched along with any error payload the server chooses to send.
//!
//! ```no_run
//! use imgapi_client::{ImgApiClient, ImgApiClientConfig};
//!
//! # async fn run() -> imgapi_client::Result<()> {
//! let client = ImgApiClient::new(ImgApiClientConfig::new().with_password("secret"))?;
//! let pong = client.ping().await?;
//! let png = client.bed("1234", "5678").await?;
//! # let _ = (pong, png);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod model;

pub use client::{ImgApiClient, default_client};
pub use config::ImgApiClientConfig;
pub use constants::VERSION;
pub use endpoint::Endpoint;
pub use error::{ImgApiError, Result};
pub use model::{Pong, Stats};
