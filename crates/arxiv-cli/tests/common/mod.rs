//! Shared fixtures for mock-server tests.
#![allow(dead_code)]

use arxiv_cli::client::ArxivClient;
use arxiv_cli::config::Config;
use wiremock::MockServer;

/// Client pointed at a mock server, no retries.
pub fn client_for(mock_server: &MockServer) -> ArxivClient {
    ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

/// Client pointed at a mock server with a custom page size.
pub fn client_with_page_size(mock_server: &MockServer, page_size: usize) -> ArxivClient {
    let config = Config { page_size, ..Config::for_testing(&mock_server.uri()) };
    ArxivClient::new(config).unwrap()
}

/// One `<entry>` element. `pdf_base` of `None` omits the PDF link.
pub fn entry_xml(short_id: &str, title: &str, authors: &[&str], pdf_base: Option<&str>) -> String {
    let authors: String =
        authors.iter().map(|a| format!("<author><name>{a}</name></author>")).collect();
    let pdf = pdf_base
        .map(|base| {
            format!(
                r#"<link title="pdf" href="{base}/pdf/{short_id}" rel="related" type="application/pdf"/>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<entry>
    <id>http://arxiv.org/abs/{short_id}</id>
    <updated>2024-02-10T09:00:00Z</updated>
    <published>2024-01-03T18:59:59Z</published>
    <title>{title}</title>
    <summary>  Abstract of
    {title}.  </summary>
    {authors}
    <link href="http://arxiv.org/abs/{short_id}" rel="alternate" type="text/html"/>
    {pdf}
    <category term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
  </entry>"#
    )
}

/// A feed wrapping `entries`, advertising `total` when given.
pub fn feed_xml(entries: &[String], total: Option<usize>) -> String {
    let total = total
        .map(|t| {
            format!(
                r#"<opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">{t}</opensearch:totalResults>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query</title>
  <id>http://arxiv.org/api/test</id>
  <updated>2024-02-10T00:00:00-05:00</updated>
  {total}
  {}
</feed>"#,
        entries.join("\n  ")
    )
}

/// Feed arXiv returns for a malformed identifier.
pub fn error_feed_xml(message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query</title>
  <id>http://arxiv.org/api/test</id>
  <entry>
    <id>http://arxiv.org/api/errors#incorrect_id_format</id>
    <title>Error</title>
    <summary>{message}</summary>
    <updated>2024-02-10T00:00:00-05:00</updated>
    <author><name>arXiv api core</name></author>
  </entry>
</feed>"#
    )
}
