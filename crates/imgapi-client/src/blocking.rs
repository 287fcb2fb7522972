//! Blocking imgapi client
//!
//! Same surface as [`crate::ImgApiClient`], built on `reqwest::blocking`. Each
//! call blocks the current thread until the response body is read.
//!
//! Like `reqwest::blocking`, this client must not be used from inside an async
//! runtime. Use [`crate::ImgApiClient`] there.

use std::{sync::LazyLock, time::Duration};

use bytes::Bytes;
use reqwest::{
    blocking::{Client, Request},
    header::AUTHORIZATION,
};
use tracing::{debug, warn};

use crate::{
    client::no_stats_value,
    config::ImgApiClientConfig,
    endpoint::{Endpoint, for_each_image_endpoint},
    error::Result,
    model::{self, Pong, Stats},
};

// The blocking builder defaults to a 30s timeout; the shared transport has none.
static SHARED_TRANSPORT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(None::<Duration>)
        .build()
        .unwrap_or_else(|_| Client::new())
});

static DEFAULT_CLIENT: LazyLock<ImgApiClient> = LazyLock::new(ImgApiClient::default);

/// Process-wide blocking client built from the default configuration
pub fn default_client() -> &'static ImgApiClient {
    &DEFAULT_CLIENT
}

macro_rules! blocking_image_methods {
    ($($(#[$meta:meta])* $name:ident => $variant:ident($($arg:ident),+);)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, $($arg: &str),+) -> Result<Bytes> {
                self.invoke(Endpoint::$variant, &[$($arg),+])
            }
        )*
    };
}

/// Blocking HTTP client for the imgapi service
#[derive(Clone, Debug)]
pub struct ImgApiClient {
    config: ImgApiClientConfig,
    transport: Client,
}

impl Default for ImgApiClient {
    fn default() -> Self {
        Self::with_transport(ImgApiClientConfig::default(), SHARED_TRANSPORT.clone())
    }
}

impl ImgApiClient {
    pub fn new(config: ImgApiClientConfig) -> Result<Self> {
        let config = config.normalized();

        let transport = if config.has_timeouts() {
            let mut builder = Client::builder().timeout(config.read_timeout());
            if let Some(timeout) = config.connect_timeout() {
                builder = builder.connect_timeout(timeout);
            }
            builder.build()?
        } else {
            SHARED_TRANSPORT.clone()
        };

        Ok(Self { config, transport })
    }

    pub fn with_transport(config: ImgApiClientConfig, transport: Client) -> Self {
        Self {
            config: config.normalized(),
            transport,
        }
    }

    pub fn config(&self) -> &ImgApiClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &Client {
        &self.transport
    }

    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    fn build_request(&self, endpoint: Endpoint, args: &[&str]) -> Result<Request> {
        let (url, query) = self.config.request_parts(endpoint, args);

        let mut builder = self.transport.get(url);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(password) = &self.config.password {
            builder = builder.header(AUTHORIZATION, password.as_str());
        }

        Ok(builder.build()?)
    }

    /// Blocking counterpart of [`crate::ImgApiClient::invoke`]
    pub fn invoke(&self, endpoint: Endpoint, args: &[&str]) -> Result<Bytes> {
        let request = self.build_request(endpoint, args)?;
        debug!("GET {}", request.url());

        let response = self
            .transport
            .execute(request)
            .inspect_err(|e| warn!("Request to {} failed: {}", endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned status {}", endpoint, status);
        }

        Ok(response.bytes()?)
    }

    pub fn ping(&self) -> Result<Pong> {
        let body = self.invoke(Endpoint::Ping, &[])?;
        model::decode(Endpoint::Ping, body)
    }

    /// `mem_stats` is sent inverted as `noStats`, see [`crate::ImgApiClient::stats`]
    pub fn stats(&self, mem_stats: bool) -> Result<Stats> {
        let body = self.invoke(Endpoint::Stats, &[no_stats_value(mem_stats)])?;
        model::decode(Endpoint::Stats, body)
    }

    for_each_image_endpoint!(blocking_image_methods);
}
