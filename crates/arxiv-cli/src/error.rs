//! Error types for the arXiv CLI.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error (includes exhausted retries)
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the arXiv API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request (400 response, or an error entry in the feed)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Atom feed could not be decoded
    #[error("Failed to parse feed: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Entry carries no PDF link
    #[error("No PDF link for {id}")]
    MissingPdf {
        /// Short arXiv identifier
        id: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from a single PDF download attempt.
#[derive(thiserror::Error, Debug)]
pub enum DownloadError {
    /// The downloader does not implement this calling convention
    #[error("download convention '{strategy}' is not supported")]
    Unsupported {
        /// Strategy name
        strategy: &'static str,
    },

    /// Every strategy reported `Unsupported`
    #[error("no supported download convention")]
    Exhausted,

    /// Transfer failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Filesystem failure around the transfer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    /// Returns true if the next strategy should be attempted.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Errors from command execution, each mapped to a process exit code.
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// No record for the identifier
    #[error("Not found: {id}")]
    NotFound {
        /// Identifier as given by the user
        id: String,
    },

    /// `--outfile` and `--outdir` given together
    #[error("Use either --outfile or --outdir, not both.")]
    ConflictingOutput,

    /// Destination exists and `--force` was not given
    #[error("File exists (use --force to overwrite): {}", path.display())]
    FileExists {
        /// Destination path
        path: PathBuf,
    },

    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// PDF transfer failed
    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),

    /// Local filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommandError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a file exists error.
    #[must_use]
    pub fn file_exists(path: impl Into<PathBuf>) -> Self {
        Self::FileExists { path: path.into() }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } | Self::ConflictingOutput => 2,
            Self::FileExists { .. } => 3,
            _ => 1,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for download attempts.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// Result type alias for commands.
pub type CommandResult<T> = Result<T, CommandError>;
