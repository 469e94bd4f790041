//! Output formatting for command results.
//!
//! Supports plain text (for humans) and JSON (for scripts).

mod json;
mod text;

pub use json::{SearchPayload, to_json};
pub use text::{AUTHOR_LIMIT, format_abstract, format_authors, format_search_results};
