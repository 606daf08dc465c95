//! Zip blob extraction.
//!
//! This module turns an in-memory zip blob into structured records,
//! one per non-directory archive entry.
//!
//! ## Architecture
//!
//! - [`entry`]: the [`ExtractedFile`] record and entry-name parsing
//! - [`extractor`]: the extraction pipeline over the `zip` container crate
//!
//! Container decoding is delegated to the `zip` crate; this module only
//! orchestrates enumeration, bounded parallel decompression, and the
//! pairing of decompressed text with parsed path metadata.
//!
//! ## Ordering
//!
//! Output order always matches the archive's entry enumeration order.
//! Decompression tasks may finish in any order, but results are joined
//! by index, never by completion.

mod entry;
mod extractor;

pub use entry::{ExtractedFile, ParsedPath};
pub use extractor::{DEFAULT_CONCURRENCY, ZipExtractor};
