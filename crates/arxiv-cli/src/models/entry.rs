//! A single arXiv record as returned by the query API.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("valid non-word pattern"));

/// One paper from an arXiv feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Canonical entry URL, e.g. `http://arxiv.org/abs/2401.01234v2`.
    pub entry_id: String,

    /// Last revision timestamp.
    pub updated: Option<DateTime<FixedOffset>>,

    /// First version timestamp.
    pub published: Option<DateTime<FixedOffset>>,

    /// Raw title (may contain line breaks).
    pub title: String,

    /// Raw abstract.
    pub summary: String,

    /// Author names in listed order.
    pub authors: Vec<String>,

    /// Related links (abstract page, PDF, DOI).
    pub links: Vec<Link>,

    /// Primary arXiv category, e.g. `cs.CL`.
    pub primary_category: Option<String>,

    /// All listed categories.
    pub categories: Vec<String>,
}

/// A `<link>` attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    /// Target URL.
    pub href: String,

    /// Link title (`pdf`, `doi`).
    pub title: Option<String>,

    /// Relation (`alternate`, `related`).
    pub rel: Option<String>,

    /// MIME type.
    pub content_type: Option<String>,
}

impl Entry {
    /// Short identifier, e.g. `2401.01234v2` or `hep-th/9901001v1`.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.entry_id
            .rsplit_once("arxiv.org/abs/")
            .map(|(_, id)| id)
            .unwrap_or(&self.entry_id)
    }

    /// URL of the PDF rendition, if the feed lists one.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.title.as_deref() == Some("pdf"))
            .map(|link| link.href.as_str())
    }

    /// File name used when the caller does not pick one.
    ///
    /// `<short id>.<title>.pdf` with slashes and non-word characters replaced by `_`.
    #[must_use]
    pub fn default_filename(&self) -> String {
        let title = if self.title.is_empty() { "UNTITLED" } else { self.title.as_str() };
        format!(
            "{}.{}.pdf",
            self.short_id().replace('/', "_"),
            NON_WORD.replace_all(title, "_")
        )
    }

    /// True for the pseudo-entry arXiv returns in place of an error response.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        self.entry_id.contains("/api/errors")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str) -> Entry {
        Entry { entry_id: id.to_string(), title: title.to_string(), ..Default::default() }
    }

    #[test]
    fn test_short_id() {
        assert_eq!(entry("http://arxiv.org/abs/2401.01234v2", "").short_id(), "2401.01234v2");
        assert_eq!(entry("http://arxiv.org/abs/hep-th/9901001v1", "").short_id(), "hep-th/9901001v1");
        assert_eq!(entry("2401.01234", "").short_id(), "2401.01234");
    }

    #[test]
    fn test_pdf_url() {
        let mut e = entry("http://arxiv.org/abs/2401.01234v1", "T");
        assert_eq!(e.pdf_url(), None);

        e.links = vec![
            Link {
                href: "http://arxiv.org/abs/2401.01234v1".to_string(),
                rel: Some("alternate".to_string()),
                ..Default::default()
            },
            Link {
                href: "http://arxiv.org/pdf/2401.01234v1".to_string(),
                title: Some("pdf".to_string()),
                ..Default::default()
            },
        ];
        assert_eq!(e.pdf_url(), Some("http://arxiv.org/pdf/2401.01234v1"));
    }

    #[test]
    fn test_default_filename() {
        let e = entry("http://arxiv.org/abs/hep-th/9901001v1", "Strings: a review!");
        assert_eq!(e.default_filename(), "hep-th_9901001v1.Strings__a_review_.pdf");

        let untitled = entry("http://arxiv.org/abs/2401.01234v1", "");
        assert_eq!(untitled.default_filename(), "2401.01234v1.UNTITLED.pdf");
    }

    #[test]
    fn test_is_api_error() {
        assert!(entry("http://arxiv.org/api/errors#incorrect_id_format_for_x", "Error").is_api_error());
        assert!(!entry("http://arxiv.org/abs/2401.01234v1", "T").is_api_error());
    }
}
