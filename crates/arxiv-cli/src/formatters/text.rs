//! Plain-text output formatting.

use crate::models::PaperRow;

/// Authors shown per search hit before eliding.
pub const AUTHOR_LIMIT: usize = 5;

/// Join at most `limit` names, appending ` et al.` when some were dropped.
#[must_use]
pub fn format_authors(authors: &[String], limit: usize) -> String {
    let shown = authors.iter().take(limit).map(String::as_str).collect::<Vec<_>>().join(", ");
    if authors.len() > limit { format!("{shown} et al.") } else { shown }
}

/// Numbered listing for `search`.
#[must_use]
pub fn format_search_results(rows: &[PaperRow]) -> String {
    if rows.is_empty() {
        return "No results.".to_string();
    }

    let mut lines = Vec::with_capacity(rows.len() * 4);
    for (i, row) in rows.iter().enumerate() {
        lines.push(format!("[{}] {} | {} | {}", i + 1, row.arxiv_id, row.published_date(), row.title));

        let authors = format_authors(&row.authors, AUTHOR_LIMIT);
        if !authors.is_empty() {
            lines.push(format!("    Authors: {authors}"));
        }
        if let Some(pdf) = &row.pdf_url {
            lines.push(format!("    PDF: {pdf}"));
        }
        lines.push(format!("    Entry: {}", row.entry_id));
    }

    lines.join("\n")
}

/// Labeled block for `abstract`.
#[must_use]
pub fn format_abstract(row: &PaperRow) -> String {
    let mut lines = vec![row.arxiv_id.clone(), format!("Title: {}", row.title)];

    if !row.authors.is_empty() {
        lines.push(format!("Authors: {}", row.authors.join(", ")));
    }
    if !row.published.is_empty() {
        lines.push(format!("Published: {}", row.published));
    }
    if let Some(pdf) = &row.pdf_url {
        lines.push(format!("PDF: {pdf}"));
    }

    lines.push(String::new());
    lines.push("Abstract:".to_string());
    lines.push(String::new());
    lines.push(row.summary.clone());

    lines.join("\n")
}
