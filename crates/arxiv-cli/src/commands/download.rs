//! The `download` operation: destination resolution and PDF transfer.

use std::path::{Path, PathBuf};

use super::lookup;
use crate::client::{ArxivClient, PdfDownloader, download_with_fallback};
use crate::error::{CommandError, CommandResult};

/// Arguments for `download`.
#[derive(Debug, Clone, Default)]
pub struct DownloadArgs {
    /// arXiv identifier, with or without version.
    pub id: String,
    /// Directory for `<id>.pdf`; `.` when neither destination is given.
    pub outdir: Option<PathBuf>,
    /// Exact destination file.
    pub outfile: Option<PathBuf>,
    /// Replace an existing destination.
    pub force: bool,
}

/// Download with the client as its own downloader.
pub async fn download(client: &ArxivClient, args: &DownloadArgs) -> CommandResult<String> {
    download_with(client, client, args).await
}

/// Download using `downloader` for the transfer. Returns the final path.
pub async fn download_with(
    client: &ArxivClient,
    downloader: &dyn PdfDownloader,
    args: &DownloadArgs,
) -> CommandResult<String> {
    if args.outfile.is_some() && args.outdir.is_some() {
        return Err(CommandError::ConflictingOutput);
    }

    let entry = lookup(client, &args.id).await?;
    let target = resolve_target(args, entry.short_id())?;

    if target.exists() && !args.force {
        return Err(CommandError::file_exists(target));
    }

    let written = download_with_fallback(downloader, &entry, &target).await?;
    Ok(written.display().to_string())
}

/// Work out the destination path and create its directory.
///
/// `--outfile` is used as is; otherwise `<outdir or .>/<arxiv_id>.pdf`.
pub fn resolve_target(args: &DownloadArgs, arxiv_id: &str) -> CommandResult<PathBuf> {
    let target = match (&args.outfile, &args.outdir) {
        (Some(_), Some(_)) => return Err(CommandError::ConflictingOutput),
        (Some(outfile), None) => outfile.clone(),
        (None, outdir) => {
            let dir = outdir.as_deref().unwrap_or_else(|| Path::new("."));
            dir.join(format!("{arxiv_id}.pdf"))
        }
    };

    let dir = crate::client::parent_dir(&target);
    std::fs::create_dir_all(&dir)?;
    tracing::debug!(path = %target.display(), "Resolved download target");

    Ok(target)
}
