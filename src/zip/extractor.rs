use std::io::{Cursor, Read};
use std::sync::Arc;

use anyhow::Result;
use bytes::Bytes;
use tokio::sync::Semaphore;
use zip::ZipArchive;

use super::entry::{ExtractedFile, ParsedPath, decode_text};

/// Default cap on in-flight decompression tasks.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Zip blob extractor.
///
/// Opens an in-memory zip blob, decompresses every non-directory entry to
/// text on blocking tasks, and returns one [`ExtractedFile`] per entry in
/// archive enumeration order.
pub struct ZipExtractor {
    blob: Bytes,
    concurrency: usize,
}

impl ZipExtractor {
    pub fn new(blob: Bytes) -> Self {
        Self {
            blob,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Set the cap on concurrent decompression tasks (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// List non-directory entries as (archive index, entry name) pairs,
    /// in archive enumeration order.
    fn file_entries(&self) -> Result<Vec<(usize, String)>> {
        let mut archive = ZipArchive::new(Cursor::new(self.blob.clone()))?;
        let mut entries = Vec::new();

        for index in 0..archive.len() {
            let entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            entries.push((index, entry.name().to_string()));
        }

        Ok(entries)
    }

    /// Extract all file entries to structured records.
    ///
    /// Decompression runs on blocking tasks bounded by a semaphore; the
    /// handles are awaited in spawn order, so the output order matches
    /// the archive's entry order rather than task completion order.
    ///
    /// Fails if the blob is not a valid zip container.
    pub async fn extract(&self) -> Result<Vec<ExtractedFile>> {
        let entries = self.file_entries()?;
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut handles = Vec::with_capacity(entries.len());

        for (index, _) in &entries {
            let index = *index;
            let blob = self.blob.clone();
            let permit = semaphore.clone().acquire_owned().await?;

            handles.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                read_entry(blob, index)
            }));
        }

        let mut results = Vec::with_capacity(entries.len());
        for ((_, name), handle) in entries.iter().zip(handles) {
            let content = handle.await??;
            results.push(ExtractedFile::new(ParsedPath::parse(name), content));
        }

        Ok(results)
    }
}

/// Decompress a single entry to text.
///
/// Each task opens its own archive over the shared blob, so no reader
/// state crosses task boundaries.
fn read_entry(blob: Bytes, index: usize) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(blob))?;
    let mut entry = archive.by_index(index)?;

    let mut data = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut data)?;

    Ok(decode_text(Bytes::from(data)))
}
