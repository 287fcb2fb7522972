// Configuration for ImgApiClient

use std::{fmt, time::Duration};

use tracing::warn;

use crate::{
    constants::{DEFAULT_HOST, DEFAULT_PORT},
    endpoint::Endpoint,
};

/// Configuration for the imgapi HTTP client
#[derive(Clone, PartialEq, Eq)]
pub struct ImgApiClientConfig {
    /// Server host name, IPv4 or IPv6 literal (default: "localhost")
    pub host: String,
    /// Server port (default: 3030)
    pub port: u16,
    /// Sent verbatim as the `Authorization` header when set
    pub password: Option<String>,
    /// Connection timeout in milliseconds (default: none)
    pub connect_timeout_ms: Option<u64>,
    /// Whole-request timeout in milliseconds (default: none)
    pub read_timeout_ms: Option<u64>,
}

impl fmt::Debug for ImgApiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImgApiClientConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .finish()
    }
}

impl Default for ImgApiClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            password: None,
            connect_timeout_ms: None,
            read_timeout_ms: None,
        }
    }
}

impl ImgApiClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the password. An empty password disables the header.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = Some(connect_ms);
        self.read_timeout_ms = Some(read_ms);
        self
    }

    /// Replace unset values with defaults.
    ///
    /// An empty host, a zero port and an empty password all count as unset.
    pub fn normalized(mut self) -> Self {
        if self.host.is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
        if self.password.as_deref().is_some_and(str::is_empty) {
            self.password = None;
        }
        self
    }

    /// `http://{host}:{port}`, with IPv6 literals in brackets
    pub fn base_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// URL and query pairs for a GET against `endpoint`
    pub fn request_parts<'a>(
        &self,
        endpoint: Endpoint,
        args: &[&'a str],
    ) -> (String, Vec<(&'static str, &'a str)>) {
        if args.len() != endpoint.params().len() {
            warn!(
                "{} expects {} arguments, got {}",
                endpoint,
                endpoint.params().len(),
                args.len()
            );
        }

        let url = format!("{}{}", self.base_url(), endpoint.path());
        (url, endpoint.query_pairs(args))
    }

    pub(crate) fn has_timeouts(&self) -> bool {
        self.connect_timeout_ms.is_some() || self.read_timeout_ms.is_some()
    }

    pub(crate) fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    pub(crate) fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ImgApiClientConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3030);
        assert!(config.password.is_none());
        assert!(!config.has_timeouts());
        assert_eq!(config.base_url(), "http://localhost:3030");
    }

    #[test]
    fn test_config_builder() {
        let config = ImgApiClientConfig::new()
            .with_host("img.example.com")
            .with_port(8080)
            .with_password("secret")
            .with_timeouts(1000, 5000);

        assert_eq!(config.host, "img.example.com");
        assert_eq!(config.port, 8080);
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.connect_timeout_ms, Some(1000));
        assert_eq!(config.read_timeout_ms, Some(5000));
        assert_eq!(config.base_url(), "http://img.example.com:8080");
    }

    #[test]
    fn test_normalized_fills_unset_values() {
        let config = ImgApiClientConfig {
            host: String::new(),
            port: 0,
            password: Some(String::new()),
            connect_timeout_ms: None,
            read_timeout_ms: None,
        }
        .normalized();

        assert_eq!(config, ImgApiClientConfig::default());
    }

    #[test]
    fn test_normalized_keeps_set_values() {
        let config = ImgApiClientConfig::new()
            .with_host("10.0.0.1")
            .with_port(9000)
            .with_password("pw");

        assert_eq!(config.clone().normalized(), config);
    }

    #[test]
    fn test_base_url_brackets_ipv6() {
        let config = ImgApiClientConfig::new().with_host("::1");
        assert_eq!(config.base_url(), "http://[::1]:3030");

        let config = ImgApiClientConfig::new().with_host("[fe80::1]").with_port(80);
        assert_eq!(config.base_url(), "http://[fe80::1]:80");

        let config = ImgApiClientConfig::new().with_host("127.0.0.1");
        assert_eq!(config.base_url(), "http://127.0.0.1:3030");
    }

    #[test]
    fn test_request_parts() {
        let config = ImgApiClientConfig::new().with_host("img").with_port(1);

        let (url, query) = config.request_parts(Endpoint::Crush, &["a", "b"]);
        assert_eq!(url, "http://img:1/crush");
        assert_eq!(query, vec![("avatar", "a"), ("target", "b")]);

        let (url, query) = config.request_parts(Endpoint::Ping, &[]);
        assert_eq!(url, "http://img:1/ping");
        assert!(query.is_empty());
    }

    #[test]
    fn test_timeouts_as_durations() {
        let config = ImgApiClientConfig::new().with_timeouts(250, 4000);
        assert_eq!(config.connect_timeout(), Some(Duration::from_millis(250)));
        assert_eq!(config.read_timeout(), Some(Duration::from_millis(4000)));
        assert_eq!(ImgApiClientConfig::new().read_timeout(), None);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ImgApiClientConfig::new().with_password("hunter2");
        let debug = format!("{config:?}");

        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("password: Some(\"***\")"));
        assert!(format!("{:?}", ImgApiClientConfig::new()).contains("password: None"));
    }
}
