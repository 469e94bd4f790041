//! Atom feed wire model for the arXiv query API.
//!
//! Only the elements the CLI needs are modeled; everything else is ignored.

use chrono::{DateTime, FixedOffset};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::ClientResult;
use crate::models::{Entry, Link};

/// A decoded page of results.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    /// Total matches advertised by the API (`opensearch:totalResults`).
    pub total_results: Option<usize>,

    /// Entries on this page.
    pub entries: Vec<Entry>,
}

/// Decode an Atom document.
pub fn parse_feed(xml: &str) -> ClientResult<Feed> {
    let raw: RawFeed = from_str(xml)?;
    Ok(Feed {
        total_results: raw.total_results.and_then(|t| t.value.trim().parse().ok()),
        entries: raw.entries.into_iter().map(Entry::from).collect(),
    })
}

#[derive(Debug, Deserialize)]
struct RawFeed {
    #[serde(rename = "totalResults", alias = "opensearch:totalResults", default)]
    total_results: Option<TextNode>,

    #[serde(rename = "entry", default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: String,
    #[serde(default)]
    updated: Option<String>,
    #[serde(default)]
    published: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(rename = "author", default)]
    authors: Vec<RawAuthor>,
    #[serde(rename = "link", default)]
    links: Vec<RawLink>,
    #[serde(rename = "primary_category", alias = "arxiv:primary_category", default)]
    primary_category: Option<RawCategory>,
    #[serde(rename = "category", default)]
    categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    #[serde(rename = "@href")]
    href: String,
    #[serde(rename = "@title", default)]
    title: Option<String>,
    #[serde(rename = "@rel", default)]
    rel: Option<String>,
    #[serde(rename = "@type", default)]
    content_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(rename = "@term")]
    term: String,
}

#[derive(Debug, Deserialize)]
struct TextNode {
    #[serde(rename = "$text", default)]
    value: String,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let updated = parse_timestamp(&raw.id, raw.updated.as_deref());
        let published = parse_timestamp(&raw.id, raw.published.as_deref());

        Self {
            entry_id: raw.id.trim().to_string(),
            updated,
            published,
            title: raw.title,
            summary: raw.summary,
            authors: raw.authors.into_iter().map(|a| a.name.trim().to_string()).collect(),
            links: raw
                .links
                .into_iter()
                .map(|l| Link {
                    href: l.href,
                    title: l.title,
                    rel: l.rel,
                    content_type: l.content_type,
                })
                .collect(),
            primary_category: raw.primary_category.map(|c| c.term),
            categories: raw.categories.into_iter().map(|c| c.term).collect(),
        }
    }
}

fn parse_timestamp(id: &str, value: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let value = value?.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::warn!(id, value, error = %e, "Unparseable timestamp in feed");
            None
        }
    }
}
