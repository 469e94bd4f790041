//! Flat projection of an [`Entry`] used for printing.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Entry;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// One paper, flattened for text or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRow {
    /// Short arXiv identifier.
    pub arxiv_id: String,
    /// Title with whitespace normalized.
    pub title: String,
    /// First version, local-zone ISO 8601, or empty.
    pub published: String,
    /// Last revision, local-zone ISO 8601, or empty.
    pub updated: String,
    /// Author names.
    pub authors: Vec<String>,
    /// Abstract with whitespace normalized.
    pub summary: String,
    /// PDF link when the feed lists one.
    pub pdf_url: Option<String>,
    /// Canonical entry URL.
    pub entry_id: String,
}

impl PaperRow {
    /// Project an entry. A missing PDF link is logged, never fatal.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        let pdf_url = entry.pdf_url().map(str::to_string);
        if pdf_url.is_none() {
            tracing::warn!(id = %entry.short_id(), "Entry has no PDF link");
        }

        Self {
            arxiv_id: entry.short_id().to_string(),
            title: clean_whitespace(&entry.title),
            published: local_iso(entry.published.as_ref()),
            updated: local_iso(entry.updated.as_ref()),
            authors: entry.authors.clone(),
            summary: clean_whitespace(&entry.summary),
            pdf_url,
            entry_id: entry.entry_id.clone(),
        }
    }

    /// Date part of `published` (`YYYY-MM-DD`), or whatever is there if shorter.
    #[must_use]
    pub fn published_date(&self) -> &str {
        self.published.get(..10).unwrap_or(&self.published)
    }
}

/// Collapse whitespace runs to a single space and trim the ends.
#[must_use]
pub fn clean_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Render a timestamp in the local zone, or an empty string when absent.
#[must_use]
pub fn local_iso(timestamp: Option<&DateTime<FixedOffset>>) -> String {
    timestamp
        .map(|ts| ts.with_timezone(&Local).to_rfc3339_opts(SecondsFormat::AutoSi, false))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Link;

    fn sample_entry() -> Entry {
        Entry {
            entry_id: "http://arxiv.org/abs/2401.01234v2".to_string(),
            published: DateTime::parse_from_rfc3339("2024-01-03T18:59:59Z").ok(),
            updated: DateTime::parse_from_rfc3339("2024-02-10T09:00:00Z").ok(),
            title: "  Robust\n  Speech   Recognition\t".to_string(),
            summary: "\nWe study\tspeech.\n\n  It works. ".to_string(),
            authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
            links: vec![Link {
                href: "http://arxiv.org/pdf/2401.01234v2".to_string(),
                title: Some("pdf".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_whitespace() {
        assert_eq!(clean_whitespace("  a\t\tb\n\nc  "), "a b c");
        assert_eq!(clean_whitespace(""), "");
        assert_eq!(clean_whitespace(" \n\t "), "");
        assert_eq!(clean_whitespace("already clean"), "already clean");
    }

    #[test]
    fn test_from_entry() {
        let row = PaperRow::from_entry(&sample_entry());
        assert_eq!(row.arxiv_id, "2401.01234v2");
        assert_eq!(row.title, "Robust Speech Recognition");
        assert_eq!(row.summary, "We study speech. It works.");
        assert_eq!(row.authors, vec!["Ada Lovelace", "Alan Turing"]);
        assert_eq!(row.pdf_url.as_deref(), Some("http://arxiv.org/pdf/2401.01234v2"));
        assert_eq!(row.entry_id, "http://arxiv.org/abs/2401.01234v2");
    }

    #[test]
    fn test_missing_pdf_is_none() {
        let entry = Entry { links: vec![], ..sample_entry() };
        assert_eq!(PaperRow::from_entry(&entry).pdf_url, None);
    }

    #[test]
    fn test_local_iso_preserves_instant() {
        let ts = DateTime::parse_from_rfc3339("2024-01-03T18:59:59Z").unwrap();
        let rendered = local_iso(Some(&ts));
        let reparsed = DateTime::parse_from_rfc3339(&rendered).unwrap();
        assert_eq!(reparsed, ts);
        assert!(!rendered.ends_with('Z'));
    }

    #[test]
    fn test_missing_timestamps_are_empty() {
        let entry = Entry { published: None, updated: None, ..sample_entry() };
        let row = PaperRow::from_entry(&entry);
        assert_eq!(row.published, "");
        assert_eq!(row.updated, "");
        assert_eq!(row.published_date(), "");
    }
}
