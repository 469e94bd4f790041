//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Retry middleware with exponential backoff
//! - Paginated search with an optional delay between pages
//! - Single-record lookup by identifier
//! - PDF transfer (see [`PdfDownloader`])

pub mod atom;
mod download;

pub use download::{DownloadStrategy, PdfDownloader, STRATEGIES, download_with_fallback};
pub(crate) use download::parent_dir;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{Entry, SearchQuery};

use self::atom::{Feed, parse_feed};

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Query endpoint.
    api_url: String,

    /// Records per page.
    page_size: usize,

    /// Pause between consecutive page requests.
    delay: std::time::Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(config.retry_min_backoff, config.retry_max_backoff)
            .build_with_max_retries(config.num_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            api_url: config.api_url,
            page_size: config.page_size.clamp(1, api::MAX_PAGE_SIZE),
            delay: config.delay,
        })
    }

    /// Run a search, following pages until `max_results` records are collected
    /// or the API runs out.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<Vec<Entry>> {
        let mut entries = Vec::new();
        let mut start = 0usize;

        while entries.len() < query.max_results {
            if start > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let remaining = query.max_results - entries.len();
            let page_len = remaining.min(self.page_size);

            let params = vec![
                ("search_query".to_string(), query.query.clone()),
                ("id_list".to_string(), String::new()),
                ("sortBy".to_string(), query.sort_by.api_value().to_string()),
                ("sortOrder".to_string(), query.sort_order.api_value().to_string()),
                ("start".to_string(), start.to_string()),
                ("max_results".to_string(), page_len.to_string()),
            ];

            let feed = self.fetch_feed(&params).await?;
            let received = feed.entries.len();
            tracing::debug!(start, received, total = ?feed.total_results, "Fetched page");

            if received == 0 {
                break;
            }

            entries.extend(feed.entries.into_iter().take(remaining));
            start += received;

            if feed.total_results.is_some_and(|total| start >= total) {
                break;
            }
        }

        Ok(entries)
    }

    /// Look up a single record by arXiv identifier.
    ///
    /// Returns `Ok(None)` when the API has no such record.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or if the API rejects the identifier.
    pub async fn get_by_id(&self, id: &str) -> ClientResult<Option<Entry>> {
        let params = vec![
            ("search_query".to_string(), String::new()),
            ("id_list".to_string(), id.to_string()),
            ("start".to_string(), "0".to_string()),
            ("max_results".to_string(), "1".to_string()),
        ];

        let feed = self.fetch_feed(&params).await?;
        Ok(feed.entries.into_iter().next())
    }

    /// Fetch and decode one feed page.
    async fn fetch_feed(&self, params: &[(String, String)]) -> ClientResult<Feed> {
        let response = self.client.get(&self.api_url).query(params).send().await?;
        let response = self.handle_response(response).await?;
        let body = response.text().await?;

        let mut feed = parse_feed(&body)?;

        // arXiv reports bad input as a pseudo-entry rather than an HTTP error.
        if let Some(err) = feed.entries.iter().find(|e| e.is_api_error()) {
            return Err(ClientError::bad_request(err.summary.trim()));
        }
        feed.entries.retain(|e| !e.entry_id.is_empty());

        Ok(feed)
    }

    /// Issue a raw GET, used for PDF transfers.
    pub(crate) async fn get_raw(&self, url: &str) -> ClientResult<reqwest::Response> {
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("page_size", &self.page_size)
            .field("delay", &self.delay)
            .finish()
    }
}
