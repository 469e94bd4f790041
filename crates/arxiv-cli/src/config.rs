//! Configuration for the arXiv client.

use std::time::Duration;

use url::Url;

use crate::models::ClientOptions;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint.
    pub const QUERY_URL: &str = "https://export.arxiv.org/api/query";

    /// Request timeout (PDF transfers can be large).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Largest page the API reliably serves in one response.
    pub const MAX_PAGE_SIZE: usize = 100;

    /// Default page size.
    pub const DEFAULT_PAGE_SIZE: usize = 100;

    /// Default retry count for transient failures.
    pub const DEFAULT_RETRIES: u32 = 3;

    /// Lower retry backoff bound.
    pub const RETRY_MIN_BACKOFF: Duration = Duration::from_secs(1);

    /// Upper retry backoff bound.
    pub const RETRY_MAX_BACKOFF: Duration = Duration::from_secs(30);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 2;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Environment variable overriding the query endpoint.
    pub const API_URL_ENV: &str = "ARXIV_API_URL";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Query endpoint (overridable for mirrors and mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Results requested per page, within `1..=100`.
    pub page_size: usize,

    /// Delay between consecutive page requests.
    pub delay: Duration,

    /// Retries for transient failures.
    pub num_retries: u32,

    /// Lower retry backoff bound.
    pub retry_min_backoff: Duration,

    /// Upper retry backoff bound.
    pub retry_max_backoff: Duration,
}

impl Config {
    /// Create a configuration against the given endpoint with default options.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            page_size: api::DEFAULT_PAGE_SIZE,
            delay: Duration::ZERO,
            num_retries: api::DEFAULT_RETRIES,
            retry_min_backoff: api::RETRY_MIN_BACKOFF,
            retry_max_backoff: api::RETRY_MAX_BACKOFF,
        }
    }

    /// Create a test configuration pointing at a mock server.
    ///
    /// Retries are disabled so error paths don't sit in backoff.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            page_size: api::DEFAULT_PAGE_SIZE,
            delay: Duration::ZERO,
            num_retries: 0,
            retry_min_backoff: Duration::from_millis(1),
            retry_max_backoff: Duration::from_millis(5),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if `ARXIV_API_URL` is set but not a valid URL.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(api::API_URL_ENV) {
            Ok(url) => Self::with_api_url(&url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Create configuration for an explicit endpoint, validating it first.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse or is not http(s).
    pub fn with_api_url(api_url: &str) -> anyhow::Result<Self> {
        let parsed = Url::parse(api_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("unsupported API URL scheme: {}", parsed.scheme());
        }
        Ok(Self::new(api_url))
    }

    /// Apply validated paging/retry options.
    #[must_use]
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.page_size = options.page_size;
        self.delay = options.delay;
        self.num_retries = options.num_retries;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::QUERY_URL)
    }
}
