//! Query and client option models.

use std::time::Duration;

use crate::config::api;

/// Ordering key for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortCriterion {
    /// Best match first.
    #[default]
    Relevance,
    /// Most recent revision.
    #[value(name = "last_updated")]
    LastUpdated,
    /// Original submission date.
    Submitted,
}

impl SortCriterion {
    /// Value of the `sortBy` query parameter.
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::LastUpdated => "lastUpdatedDate",
            Self::Submitted => "submittedDate",
        }
    }
}

/// Direction for search ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Value of the `sortOrder` query parameter.
    #[must_use]
    pub const fn api_value(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// A keyword search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// arXiv query string (e.g. `all:whisper AND cat:cs.CL`).
    pub query: String,

    /// Maximum records to return across all pages.
    pub max_results: usize,

    /// Ordering key.
    pub sort_by: SortCriterion,

    /// Ordering direction.
    pub sort_order: SortOrder,
}

impl SearchQuery {
    /// Create a query with default ordering.
    #[must_use]
    pub fn new(query: impl Into<String>, max_results: usize) -> Self {
        Self {
            query: query.into(),
            max_results,
            sort_by: SortCriterion::default(),
            sort_order: SortOrder::default(),
        }
    }

    /// Set the ordering.
    #[must_use]
    pub const fn sorted(mut self, sort_by: SortCriterion, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }
}

/// Paging and retry settings after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Records per page, within `1..=100`.
    pub page_size: usize,

    /// Pause between page requests.
    pub delay: Duration,

    /// Retries for transient failures.
    pub num_retries: u32,
}

impl ClientOptions {
    /// Clamp raw user input: page size into `1..=100`, delay and retries floored at zero.
    ///
    /// A NaN delay counts as zero; one too large for [`Duration`] saturates.
    #[must_use]
    pub fn new(page_size: i64, delay_seconds: f64, retries: i64) -> Self {
        let page_size = page_size.clamp(1, api::MAX_PAGE_SIZE as i64) as usize;
        let delay = if delay_seconds.is_nan() {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(delay_seconds.max(0.0)).unwrap_or(Duration::MAX)
        };
        let num_retries = u32::try_from(retries.max(0)).unwrap_or(u32::MAX);
        Self { page_size, delay, num_retries }
    }

    /// Default paging with only the retry count supplied.
    #[must_use]
    pub fn with_retries(retries: i64) -> Self {
        Self::new(api::DEFAULT_PAGE_SIZE as i64, 0.0, retries)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::with_retries(i64::from(api::DEFAULT_RETRIES))
    }
}
