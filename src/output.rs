//! Writes the crawled Markdown to disk.
//!
//! The split mode decides the file set:
//! - `Combined`: one `<site>_combined.md`
//! - `Files(n)`: exactly `n` files `<site>_1.md` .. `<site>_n.md`, pages spread
//!   over them in contiguous runs of `ceil(pages / n)`
//! - `PerPage`: one `<site>_<i>.md` per crawled page
//!
//! The expected file set is always written, even when nothing was crawled.

use crate::error::OutputError;
use crate::results::CrawlDocument;
use std::path::{Path, PathBuf};

/// How crawled pages are distributed over output files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Everything in a single file
    Combined,
    /// Exactly this many files
    Files(usize),
    /// One file per page
    PerPage,
}

impl From<i64> for SplitMode {
    fn from(value: i64) -> Self {
        match value {
            0 => SplitMode::Combined,
            n if n > 0 => SplitMode::Files(usize::try_from(n).unwrap_or(usize::MAX)),
            _ => SplitMode::PerPage,
        }
    }
}

/// Splits `chunks` into exactly `num_files` contiguous groups, yielded lazily.
///
/// Every group holds `ceil(len / num_files)` chunks except the tail, which may
/// be shorter or empty.
pub fn partition<T>(chunks: &[T], num_files: usize) -> impl Iterator<Item = &[T]> {
    let chunk_size = if num_files == 0 {
        0
    } else {
        chunks.len().div_ceil(num_files)
    };

    (0..num_files).map(move |i| {
        let start = i.saturating_mul(chunk_size).min(chunks.len());
        let end = (i + 1).saturating_mul(chunk_size).min(chunks.len());
        &chunks[start..end]
    })
}

pub fn combined_file_name(site_name: &str) -> String {
    format!("{site_name}_combined.md")
}

/// Name of the `index`-th split file, counting from 1
pub fn split_file_name(site_name: &str, index: usize) -> String {
    format!("{site_name}_{index}.md")
}

/// Writes `document` into `dir` according to `split`, returning the written paths in order
pub fn write_outputs(
    dir: &Path,
    site_name: &str,
    split: SplitMode,
    document: &CrawlDocument,
) -> Result<Vec<PathBuf>, OutputError> {
    match split {
        SplitMode::Combined => {
            let path = dir.join(combined_file_name(site_name));
            write_file(&path, &document.combined)?;
            ::log::info!("Saved combined output to: {}", path.display());
            Ok(vec![path])
        }
        SplitMode::Files(num_files) => {
            let mut written = Vec::new();
            for (i, group) in partition(&document.chunks, num_files).enumerate() {
                let path = dir.join(split_file_name(site_name, i + 1));
                write_file(&path, &group.join("\n"))?;
                ::log::info!("Saved: {}", path.display());
                written.push(path);
            }
            Ok(written)
        }
        SplitMode::PerPage => {
            let mut written = Vec::with_capacity(document.chunks.len());
            for (i, chunk) in document.chunks.iter().enumerate() {
                let path = dir.join(split_file_name(site_name, i + 1));
                write_file(&path, chunk)?;
                ::log::info!("Saved: {}", path.display());
                written.push(path);
            }
            Ok(written)
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    std::fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
