//! Integration tests for the arXiv client.
//!
//! These tests hit the real arXiv API.
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use arxiv_cli::client::ArxivClient;
use arxiv_cli::commands::{self, DownloadArgs};
use arxiv_cli::config::Config;
use arxiv_cli::models::{PaperRow, SearchQuery, SortCriterion, SortOrder};

/// "Attention Is All You Need" - Vaswani et al. 2017
const ATTENTION: &str = "1706.03762";

fn create_client() -> ArxivClient {
    ArxivClient::new(Config::default()).expect("Failed to create client")
}

#[tokio::test]
async fn test_lookup_known_paper() {
    let client = create_client();
    let entry = client.get_by_id(ATTENTION).await.unwrap().expect("paper exists");
    let row = PaperRow::from_entry(&entry);

    assert!(row.arxiv_id.starts_with(ATTENTION));
    assert_eq!(row.title, "Attention Is All You Need");
    assert!(row.authors.iter().any(|a| a.contains("Vaswani")));
    assert!(row.pdf_url.is_some());
}

#[tokio::test]
async fn test_search_paginates() {
    let client = ArxivClient::new(Config { page_size: 5, ..Config::default() }).unwrap();
    let query = SearchQuery::new("cat:cs.CL", 12).sorted(SortCriterion::Submitted, SortOrder::Descending);

    let hits = client.search(&query).await.unwrap();
    assert_eq!(hits.len(), 12);
}

#[tokio::test]
async fn test_download_pdf() {
    let client = create_client();
    let dir = tempfile::tempdir().unwrap();
    let args = DownloadArgs {
        id: ATTENTION.to_string(),
        outdir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let printed = commands::download(&client, &args).await.unwrap();
    let bytes = std::fs::read(&printed).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
