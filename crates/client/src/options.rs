// ABOUTME: Configuration for the playfeed client: endpoints, timeout, headers.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Origin of the upstream content API.
pub const DEFAULT_BASE_URL: &str = "https://ai.play.tv2.no";

/// Path of the catalog feed, relative to the base url.
pub const DEFAULT_CATALOG_PATH: &str = "/api/v4/feeds/page_01jwxh2p1me02sbhyxmht24cbp";

/// Prefix to which a normalized title path is appended for detail lookups.
pub const DEFAULT_DETAILS_PATH_PREFIX: &str = "/api/v4/content/path/";

/// Configuration options for the playfeed client.
#[derive(Debug, Clone)]
pub struct Options {
    pub base_url: String,
    pub catalog_path: String,
    pub details_path_prefix: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            details_path_prefix: DEFAULT_DETAILS_PATH_PREFIX.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("playfeed/", env!("CARGO_PKG_VERSION")).to_string(),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the origin both endpoints are resolved against.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Set the catalog feed path.
    pub fn catalog_path(mut self, path: impl Into<String>) -> Self {
        self.opts.catalog_path = path.into();
        self
    }

    /// Set the detail endpoint prefix.
    pub fn details_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.opts.details_path_prefix = prefix.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Timeout and user agent are then the caller's concern.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Result<Client, crate::FetchError> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
