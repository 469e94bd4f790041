//! JSON output formatting.

use serde::{Deserialize, Serialize};

use crate::models::PaperRow;

/// Envelope printed by `search --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPayload {
    /// Query string as given.
    pub query: String,
    /// Number of rows in `results`.
    pub count: usize,
    /// Rows in API order.
    pub results: Vec<PaperRow>,
}

impl SearchPayload {
    /// Wrap rows for output.
    #[must_use]
    pub fn new(query: impl Into<String>, results: Vec<PaperRow>) -> Self {
        Self { query: query.into(), count: results.len(), results }
    }
}

/// Pretty-print with two-space indentation; non-ASCII stays unescaped.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
