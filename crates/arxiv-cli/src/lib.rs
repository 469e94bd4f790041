//! arXiv CLI
//!
//! A command-line helper over the arXiv export API: keyword search, abstract
//! retrieval and PDF download.
//!
//! # Features
//!
//! - **Paginated search**: page size, inter-page delay and retry count are configurable
//! - **Text or JSON output**: `--json` emits a single pretty-printed document
//! - **Download fallback**: PDF transfers go through an ordered list of calling conventions
//!
//! # Example
//!
//! ```no_run
//! use arxiv_cli::{client::ArxivClient, config::Config, models::SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivClient::new(config)?;
//!
//!     let hits = client.search(&SearchQuery::new("all:whisper AND cat:cs.CL", 5)).await?;
//!     println!("{} hits", hits.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, CommandError, DownloadError};
