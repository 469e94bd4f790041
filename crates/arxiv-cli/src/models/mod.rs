//! Data models for arXiv records, queries and output rows.

mod entry;
mod query;
mod row;

pub use entry::{Entry, Link};
pub use query::{ClientOptions, SearchQuery, SortCriterion, SortOrder};
pub use row::{PaperRow, clean_whitespace, local_iso};
