mod http;
mod local;

pub use http::HttpFetcher;
pub use local::FileWriter;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Trait for fetching a binary blob from a URL
#[async_trait]
pub trait FetchBlob: Send + Sync {
    /// Retrieve the full body at the given URL as a blob
    async fn fetch(&self, url: &str) -> Result<Bytes>;
}

/// Trait for the extraction progress log
///
/// Invoked once with `is_header = true` for the batch caption, then once
/// per written file with `is_header = false`.
pub trait ExtractLog: Send + Sync {
    fn log(&self, message: &str, is_header: bool);
}

/// Default log that writes to stderr
pub struct ConsoleLog;

impl ExtractLog for ConsoleLog {
    fn log(&self, message: &str, is_header: bool) {
        if is_header {
            eprintln!("{message}");
        } else {
            eprintln!("  extracting: {message}");
        }
    }
}
