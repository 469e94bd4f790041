//! CLI operations: search, abstract, download.
//!
//! Each operation returns the text to print on stdout, or a [`CommandError`]
//! carrying the exit code.
//!
//! [`CommandError`]: crate::error::CommandError

mod download;

pub use download::{DownloadArgs, download, download_with, resolve_target};

use crate::client::ArxivClient;
use crate::error::{CommandError, CommandResult};
use crate::formatters::{self, SearchPayload};
use crate::models::{Entry, PaperRow, SearchQuery};

/// Arguments for `search`.
#[derive(Debug, Clone)]
pub struct SearchArgs {
    /// Query and ordering.
    pub query: SearchQuery,
    /// Emit JSON instead of a listing.
    pub json: bool,
}

/// Arguments for `abstract`.
#[derive(Debug, Clone)]
pub struct AbstractArgs {
    /// arXiv identifier, with or without version.
    pub id: String,
    /// Emit JSON instead of a labeled block.
    pub json: bool,
}

/// Run a search and render the hits.
pub async fn search(client: &ArxivClient, args: &SearchArgs) -> CommandResult<String> {
    tracing::info!(
        query = %args.query.query,
        max_results = args.query.max_results,
        sort_by = ?args.query.sort_by,
        sort_order = ?args.query.sort_order,
        "Searching arXiv"
    );

    let entries = client.search(&args.query).await?;
    let rows: Vec<PaperRow> = entries.iter().map(PaperRow::from_entry).collect();

    if args.json {
        let payload = SearchPayload::new(args.query.query.clone(), rows);
        return Ok(formatters::to_json(&payload)?);
    }

    Ok(formatters::format_search_results(&rows))
}

/// Fetch one record and render its abstract.
pub async fn fetch_abstract(client: &ArxivClient, args: &AbstractArgs) -> CommandResult<String> {
    let entry = lookup(client, &args.id).await?;
    let row = PaperRow::from_entry(&entry);

    if args.json {
        return Ok(formatters::to_json(&row)?);
    }

    Ok(formatters::format_abstract(&row))
}

/// Resolve an identifier to exactly one entry.
pub(crate) async fn lookup(client: &ArxivClient, id: &str) -> CommandResult<Entry> {
    tracing::info!(id, "Looking up arXiv record");
    client.get_by_id(id).await?.ok_or_else(|| CommandError::not_found(id))
}
