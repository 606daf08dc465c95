use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

use super::FetchBlob;
use anyhow::{Result, bail};

/// HTTP fetcher for remote zip blobs
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with a 30 second request timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FetchBlob for HttpFetcher {
    /// Fetch the full response body at `url` as a blob
    ///
    /// Fails on transport errors and on non-success status codes; no
    /// partial output is produced.
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        let resp = self.client.get(url).send().await?;

        if !resp.status().is_success() {
            bail!("HTTP request failed with status: {}", resp.status());
        }

        Ok(resp.bytes().await?)
    }
}
