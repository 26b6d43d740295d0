//! Async API for non-blocking extraction.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! unvocab = { version = "0.1", features = ["async"] }
//! ```
//!
//! Extraction itself is CPU-bound, so these wrappers read files with
//! Tokio and run the parsing stages on the blocking pool.

use crate::error::{Error, Result};
use crate::model::VocabularyBatch;
use crate::options::ExtractOptions;
use std::path::Path;
#[cfg(feature = "pdf")]
use std::time::Duration;
use tokio::fs;

/// Asynchronously extracts vocabulary pairs from a CSV file.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> unvocab::Result<()> {
/// let options = unvocab::ExtractOptions::default();
/// let batch = unvocab::async_api::extract_csv_file("words.csv", &options).await?;
/// println!("{} pairs", batch.len());
/// # Ok(())
/// # }
/// ```
pub async fn extract_csv_file(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<VocabularyBatch> {
    let data = fs::read(path).await?;
    let options = options.clone();
    tokio::task::spawn_blocking(move || crate::csv::extract_csv_bytes(&data, &options))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

/// Asynchronously extracts vocabulary pairs from a PDF file.
#[cfg(feature = "pdf")]
pub async fn extract_pdf_file(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<VocabularyBatch> {
    let data = fs::read(path).await?;
    let options = options.clone();
    tokio::task::spawn_blocking(move || crate::pdf::extract_pdf_bytes(&data, &options))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

/// Like [`extract_pdf_file`], but abandons the attempt once `deadline`
/// expires, surfacing expiry as [`Error::Timeout`]. A defensive measure
/// against malformed or huge documents; pair it with
/// [`ExtractOptions::max_pages`] for a page-count bound.
#[cfg(feature = "pdf")]
pub async fn extract_pdf_file_timeout(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
    deadline: Duration,
) -> Result<VocabularyBatch> {
    match tokio::time::timeout(deadline, extract_pdf_file(path, options)).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            seconds: deadline.as_secs(),
        }),
    }
}

/// Asynchronously extracts from a file, auto-detecting the input kind.
pub async fn extract_file(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<VocabularyBatch> {
    let data = fs::read(path).await?;
    let options = options.clone();
    tokio::task::spawn_blocking(move || crate::extract_bytes(&data, &options))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_async_csv_extraction() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "apple,사과\nbanana,바나나").unwrap();
        let batch = extract_csv_file(file.path(), &ExtractOptions::default())
            .await
            .unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[tokio::test]
    async fn test_async_missing_file_is_io_error() {
        let err = extract_csv_file("/nonexistent/words.csv", &ExtractOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
