//! PDF transfer conventions and the ordered fallback between them.
//!
//! A [`PdfDownloader`] may accept a full destination path, a directory plus
//! file name, or only a directory (choosing its own file name). Callers go
//! through [`download_with_fallback`], which tries each convention in
//! [`STRATEGIES`] order and moves the result to the requested path.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use super::ArxivClient;
use crate::error::{ClientError, DownloadError, DownloadResult};
use crate::models::Entry;

/// A calling convention for a PDF transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStrategy {
    /// Write straight to the destination path.
    FullPath,
    /// Write into the destination directory under the destination file name.
    DirAndBasename,
    /// Write into the destination directory under the downloader's own name.
    DirOnly,
}

/// Attempt order.
pub const STRATEGIES: [DownloadStrategy; 3] =
    [DownloadStrategy::FullPath, DownloadStrategy::DirAndBasename, DownloadStrategy::DirOnly];

impl DownloadStrategy {
    /// Stable name used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullPath => "full-path",
            Self::DirAndBasename => "dir-and-basename",
            Self::DirOnly => "dir-only",
        }
    }

    /// Run this convention against `downloader` for `target`.
    pub async fn attempt(
        self,
        downloader: &dyn PdfDownloader,
        entry: &Entry,
        target: &Path,
    ) -> DownloadResult<PathBuf> {
        let dir = parent_dir(target);
        match self {
            Self::FullPath => downloader.download_to_path(entry, target).await,
            Self::DirAndBasename => {
                let Some(name) = target.file_name().and_then(|n| n.to_str()) else {
                    return Err(DownloadError::Unsupported { strategy: self.name() });
                };
                downloader.download_to_dir_as(entry, &dir, name).await
            }
            Self::DirOnly => downloader.download_to_dir(entry, &dir).await,
        }
    }
}

/// Something that can fetch an entry's PDF onto disk.
///
/// Every method defaults to [`DownloadError::Unsupported`]; implementors
/// override the conventions they support and return the path actually written.
#[async_trait::async_trait]
pub trait PdfDownloader: Send + Sync {
    /// Write the PDF to exactly `path`.
    async fn download_to_path(&self, entry: &Entry, path: &Path) -> DownloadResult<PathBuf> {
        let _ = (entry, path);
        Err(DownloadError::Unsupported { strategy: DownloadStrategy::FullPath.name() })
    }

    /// Write the PDF into `dir` as `filename`.
    async fn download_to_dir_as(
        &self,
        entry: &Entry,
        dir: &Path,
        filename: &str,
    ) -> DownloadResult<PathBuf> {
        let _ = (entry, dir, filename);
        Err(DownloadError::Unsupported { strategy: DownloadStrategy::DirAndBasename.name() })
    }

    /// Write the PDF into `dir` under a name of the downloader's choosing.
    async fn download_to_dir(&self, entry: &Entry, dir: &Path) -> DownloadResult<PathBuf> {
        let _ = (entry, dir);
        Err(DownloadError::Unsupported { strategy: DownloadStrategy::DirOnly.name() })
    }
}

/// Try each strategy in order until one succeeds, then make sure the file
/// sits at `target`.
///
/// Only [`DownloadError::Unsupported`] moves on to the next strategy; any
/// other failure is returned as is.
pub async fn download_with_fallback(
    downloader: &dyn PdfDownloader,
    entry: &Entry,
    target: &Path,
) -> DownloadResult<PathBuf> {
    for strategy in STRATEGIES {
        match strategy.attempt(downloader, entry, target).await {
            Ok(written) => {
                tracing::debug!(strategy = strategy.name(), path = %written.display(), "PDF written");
                return relocate(&written, target);
            }
            Err(e) if e.is_unsupported() => {
                tracing::debug!(strategy = strategy.name(), "Download convention unsupported, trying next");
            }
            Err(e) => return Err(e),
        }
    }

    Err(DownloadError::Exhausted)
}

/// Move `written` to `target` unless they already name the same file.
fn relocate(written: &Path, target: &Path) -> DownloadResult<PathBuf> {
    if std::path::absolute(written)? == std::path::absolute(target)? {
        return Ok(target.to_path_buf());
    }

    std::fs::create_dir_all(parent_dir(target))?;
    std::fs::rename(written, target)?;
    tracing::debug!(from = %written.display(), to = %target.display(), "Moved PDF into place");
    Ok(target.to_path_buf())
}

/// Parent directory of `path`, `.` when it has none.
pub(crate) fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

impl ArxivClient {
    /// Stream the entry's PDF into `path`, via a `.part` sibling so a failed
    /// transfer never clobbers an existing file.
    ///
    /// The `.part` file is created fresh and removed on every failure after
    /// that; an existing file of that name is left alone and reported.
    async fn transfer(&self, entry: &Entry, path: &Path) -> DownloadResult<PathBuf> {
        let url = entry
            .pdf_url()
            .ok_or_else(|| ClientError::MissingPdf { id: entry.short_id().to_string() })?;

        tracing::info!(id = %entry.short_id(), url, path = %path.display(), "Downloading PDF");

        let response = self.get_raw(url).await?;

        let partial = partial_path(path);
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&partial)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    std::io::Error::new(
                        e.kind(),
                        format!("partial download already exists: {}", partial.display()),
                    )
                } else {
                    e
                }
            })?;

        let written = match write_body(response, file).await {
            Ok(bytes) => tokio::fs::rename(&partial, path).await.map(|()| bytes).map_err(DownloadError::from),
            Err(e) => Err(e),
        };

        match written {
            Ok(bytes) => {
                tracing::debug!(bytes, path = %path.display(), "Transfer complete");
                Ok(path.to_path_buf())
            }
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                    tracing::warn!(path = %partial.display(), error = %cleanup, "Could not remove partial download");
                }
                Err(e)
            }
        }
    }
}

/// `<path>.part`.
fn partial_path(path: &Path) -> PathBuf {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    PathBuf::from(partial)
}

/// Copy the response body into `file`, returning the byte count.
async fn write_body(mut response: reqwest::Response, mut file: tokio::fs::File) -> DownloadResult<usize> {
    let mut bytes = 0usize;
    while let Some(chunk) = response.chunk().await.map_err(ClientError::from)? {
        bytes += chunk.len();
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(bytes)
}

#[async_trait::async_trait]
impl PdfDownloader for ArxivClient {
    async fn download_to_path(&self, entry: &Entry, path: &Path) -> DownloadResult<PathBuf> {
        self.transfer(entry, path).await
    }

    async fn download_to_dir_as(
        &self,
        entry: &Entry,
        dir: &Path,
        filename: &str,
    ) -> DownloadResult<PathBuf> {
        self.transfer(entry, &dir.join(filename)).await
    }

    async fn download_to_dir(&self, entry: &Entry, dir: &Path) -> DownloadResult<PathBuf> {
        self.transfer(entry, &dir.join(entry.default_filename())).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records which conventions were called and writes a stub file for the
    /// one it supports.
    struct DirOnlyDownloader {
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait::async_trait]
    impl PdfDownloader for DirOnlyDownloader {
        async fn download_to_path(&self, _: &Entry, _: &Path) -> DownloadResult<PathBuf> {
            self.calls.lock().unwrap().push("full-path");
            Err(DownloadError::Unsupported { strategy: "full-path" })
        }

        async fn download_to_dir(&self, entry: &Entry, dir: &Path) -> DownloadResult<PathBuf> {
            self.calls.lock().unwrap().push("dir-only");
            let path = dir.join(entry.default_filename());
            std::fs::write(&path, b"%PDF-1.4 stub")?;
            Ok(path)
        }
    }

    /// Supports the full path convention but the transfer itself fails.
    struct FailingDownloader;

    #[async_trait::async_trait]
    impl PdfDownloader for FailingDownloader {
        async fn download_to_path(&self, _: &Entry, _: &Path) -> DownloadResult<PathBuf> {
            Err(ClientError::server(503, "unavailable").into())
        }

        async fn download_to_dir(&self, _: &Entry, _: &Path) -> DownloadResult<PathBuf> {
            panic!("must not fall back after a transfer error");
        }
    }

    struct NothingDownloader;

    impl PdfDownloader for NothingDownloader {}

    fn entry() -> Entry {
        Entry {
            entry_id: "http://arxiv.org/abs/2401.01234v1".to_string(),
            title: "Sample".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_strategy_order() {
        let names: Vec<_> = STRATEGIES.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["full-path", "dir-and-basename", "dir-only"]);
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("a.pdf")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("out/a.pdf")), PathBuf::from("out"));
    }

    #[test]
    fn test_falls_back_and_relocates() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("2401.01234v1.pdf");
        let downloader = DirOnlyDownloader { calls: Mutex::new(Vec::new()) };

        let written =
            tokio_test::block_on(download_with_fallback(&downloader, &entry(), &target)).unwrap();

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.4 stub");
        assert!(!dir.path().join(entry().default_filename()).exists());
        assert_eq!(*downloader.calls.lock().unwrap(), vec!["full-path", "dir-only"]);
    }

    #[test]
    fn test_transfer_error_is_not_masked() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("x.pdf");

        let err = tokio_test::block_on(download_with_fallback(&FailingDownloader, &entry(), &target))
            .unwrap_err();

        assert!(matches!(err, DownloadError::Client(ClientError::Server { status: 503, .. })));
    }

    #[test]
    fn test_all_unsupported_is_exhausted() {
        let err = tokio_test::block_on(download_with_fallback(
            &NothingDownloader,
            &entry(),
            Path::new("x.pdf"),
        ))
        .unwrap_err();

        assert!(matches!(err, DownloadError::Exhausted));
    }
}
