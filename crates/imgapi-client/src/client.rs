// ImgApiClient - async facade for all imgapi endpoints

use std::sync::LazyLock;

use bytes::Bytes;
use reqwest::{Client, Request, header::AUTHORIZATION};
use tracing::{debug, warn};

use crate::{
    config::ImgApiClientConfig,
    endpoint::{Endpoint, for_each_image_endpoint},
    error::Result,
    model::{self, Pong, Stats},
};

static SHARED_TRANSPORT: LazyLock<Client> = LazyLock::new(Client::new);

static DEFAULT_CLIENT: LazyLock<ImgApiClient> = LazyLock::new(ImgApiClient::default);

/// Process-wide client built from the default configuration.
///
/// Initialized on first use. Prefer constructing an [`ImgApiClient`] when the
/// server is not on `localhost:3030`.
pub fn default_client() -> &'static ImgApiClient {
    &DEFAULT_CLIENT
}

macro_rules! async_image_methods {
    ($($(#[$meta:meta])* $name:ident => $variant:ident($($arg:ident),+);)*) => {
        $(
            $(#[$meta])*
            pub async fn $name(&self, $($arg: &str),+) -> Result<Bytes> {
                self.invoke(Endpoint::$variant, &[$($arg),+]).await
            }
        )*
    };
}

/// Async HTTP client for the imgapi service
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
    /// Create a new ImgApiClient with the given configuration.
    ///
    /// Without timeouts the shared transport is used; with timeouts a
    /// dedicated transport is built.
    pub fn new(config: ImgApiClientConfig) -> Result<Self> {
        let config = config.normalized();

        let transport = if config.has_timeouts() {
            let mut builder = Client::builder();
            if let Some(timeout) = config.connect_timeout() {
                builder = builder.connect_timeout(timeout);
            }
            if let Some(timeout) = config.read_timeout() {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        } else {
            SHARED_TRANSPORT.clone()
        };

        Ok(Self { config, transport })
    }

    /// Create a client over a caller-provided transport.
    /// Timeouts in `config` are ignored; configure them on `transport` instead.
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

    /// GET `endpoint` with `args` bound to its parameters in order and return
    /// the raw body, whatever the status code.
    ///
    /// Missing arguments leave their parameters out of the query; extra
    /// arguments are ignored.
    pub async fn invoke(&self, endpoint: Endpoint, args: &[&str]) -> Result<Bytes> {
        let request = self.build_request(endpoint, args)?;
        debug!("GET {}", request.url());

        let response = self
            .transport
            .execute(request)
            .await
            .inspect_err(|e| warn!("Request to {} failed: {}", endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned status {}", endpoint, status);
        }

        Ok(response.bytes().await?)
    }

    // ============================================================================
    // Service APIs
    // ============================================================================

    pub async fn ping(&self) -> Result<Pong> {
        let body = self.invoke(Endpoint::Ping, &[]).await?;
        model::decode(Endpoint::Ping, body)
    }

    /// Fetch server stats.
    ///
    /// `mem_stats` is sent inverted as `noStats`: `true` sends `noStats=false`,
    /// `false` sends `noStats=true`.
    pub async fn stats(&self, mem_stats: bool) -> Result<Stats> {
        let body = self
            .invoke(Endpoint::Stats, &[no_stats_value(mem_stats)])
            .await?;
        model::decode(Endpoint::Stats, body)
    }

    // ============================================================================
    // Image APIs
    // ============================================================================

    for_each_image_endpoint!(async_image_methods);
}

pub(crate) fn no_stats_value(mem_stats: bool) -> &'static str {
    if mem_stats { "false" } else { "true" }
}
