use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tokio::fs;
use tokio::sync::Semaphore;

use super::ExtractLog;
use crate::zip::{DEFAULT_CONCURRENCY, ExtractedFile};

/// Writes extracted records into a destination directory.
///
/// Writes run concurrently under the same bounded semaphore scheme as
/// extraction, joined in record order. The destination directory must
/// already exist; no directories are created.
pub struct FileWriter {
    concurrency: usize,
}

impl FileWriter {
    pub fn new() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Set the cap on concurrent writes (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Write each record to `save_path/<file_name>.<file_type>`.
    ///
    /// Logs `header` once, then one line per file as its write completes,
    /// in record order. Content typed `json` is parsed and re-serialized
    /// with two-space indentation first; invalid JSON is an error. The
    /// first failure aborts the remaining batch and propagates.
    pub async fn write_files(
        &self,
        files: &[ExtractedFile],
        save_path: &Path,
        header: &str,
        log: &dyn ExtractLog,
    ) -> Result<()> {
        log.log(header, true);

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut handles = Vec::with_capacity(files.len());

        for file in files {
            let dest = save_path.join(file.disk_name());
            let file_type = file.file_type.clone();
            let content = file.content.clone();
            let permit = semaphore.clone().acquire_owned().await?;

            handles.push(tokio::spawn(async move {
                let _permit = permit;
                write_one(dest, &file_type, content).await
            }));
        }

        let mut pending = handles.into_iter().zip(files);
        while let Some((handle, file)) = pending.next() {
            let outcome = match handle.await {
                Ok(result) => result,
                Err(join_err) => Err(join_err.into()),
            };

            if let Err(err) = outcome {
                for (rest, _) in pending {
                    rest.abort();
                }
                return Err(err);
            }

            log.log(&file.disk_name(), false);
        }

        Ok(())
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a single record, normalizing JSON content first.
async fn write_one(dest: PathBuf, file_type: &str, content: String) -> Result<()> {
    let content = if file_type == "json" {
        let value: serde_json::Value = serde_json::from_str(&content)?;
        serde_json::to_string_pretty(&value)?
    } else {
        content
    };

    fs::write(&dest, content).await?;
    Ok(())
}
