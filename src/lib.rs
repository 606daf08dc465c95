//! # zipex
//!
//! Async zip extraction from blobs or HTTP URLs with structured path records.
//!
//! This library reads a zip-formatted blob, enumerates its non-directory
//! entries, decompresses each entry's content to text in parallel, and
//! returns one record per entry carrying the parsed path components and
//! the decoded content. Records can then be written to a destination
//! directory, with JSON content normalized to two-space indentation.
//!
//! ## Features
//!
//! - Extract zip blobs from memory or fetched from HTTP/HTTPS URLs
//! - Output order always matches the archive's entry order
//! - Bounded parallel decompression and bounded parallel disk writes
//! - JSON records validated and pretty-printed on write
//! - Injected fetch and logging capabilities for testability
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use zipex::{ConsoleLog, FileWriter, HttpFetcher, zip_contents_from_url};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = HttpFetcher::new()?;
//!     let files = zip_contents_from_url(&fetcher, "https://example.com/pack.zip").await?;
//!
//!     FileWriter::new()
//!         .write_files(&files, Path::new("out"), "Extracting pack", &ConsoleLog)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod io;
pub mod zip;

pub use io::{ConsoleLog, ExtractLog, FetchBlob, FileWriter, HttpFetcher};
pub use zip::{ExtractedFile, ParsedPath, ZipExtractor};

use anyhow::Result;

/// Fetch a zip blob from a URL and extract its file entries.
///
/// Composes [`FetchBlob::fetch`] with [`ZipExtractor::extract`]. Fetch or
/// container errors propagate; no partial output is produced.
pub async fn zip_contents_from_url<F: FetchBlob>(
    fetcher: &F,
    url: &str,
) -> Result<Vec<ExtractedFile>> {
    let blob = fetcher.fetch(url).await?;
    ZipExtractor::new(blob).extract().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::io::{Cursor, Write};

    struct StubFetcher {
        blob: Bytes,
    }

    #[async_trait]
    impl FetchBlob for StubFetcher {
        async fn fetch(&self, _url: &str) -> anyhow::Result<Bytes> {
            Ok(self.blob.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl FetchBlob for FailingFetcher {
        async fn fetch(&self, _url: &str) -> anyhow::Result<Bytes> {
            anyhow::bail!("HTTP request failed with status: 404 Not Found");
        }
    }

    fn single_entry_zip() -> Bytes {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ::zip::ZipWriter::new(&mut cursor);
        let options = ::zip::write::SimpleFileOptions::default();
        writer.start_file("mod/module.json", options).unwrap();
        writer.write_all(b"{\"id\":\"mod\"}").unwrap();
        writer.finish().unwrap();
        Bytes::from(cursor.into_inner())
    }

    #[tokio::test]
    async fn composes_fetch_and_extract() {
        let fetcher = StubFetcher {
            blob: single_entry_zip(),
        };

        let files = zip_contents_from_url(&fetcher, "https://example.com/pack.zip")
            .await
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "mod/");
        assert_eq!(files[0].file_name, "module");
        assert_eq!(files[0].file_type, "json");
        assert_eq!(files[0].content, "{\"id\":\"mod\"}");
    }

    #[tokio::test]
    async fn fetch_failure_rejects_without_partial_output() {
        let result = zip_contents_from_url(&FailingFetcher, "https://example.com/missing.zip").await;

        assert!(result.is_err());
    }
}
