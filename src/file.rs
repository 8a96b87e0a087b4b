//! Uploaded-file handles.
//!
//! Validation only needs a file's byte length and declared MIME type, so the
//! handle is a trait. UI layers wrap their own file objects; [`FileCandidate`]
//! is the plain-data handle shipped with the crate.

use crate::error::{Error, Result};
use crate::utils::determine_content_type;
use futures::future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Capability required of anything offered to an [`crate::UploadPolicy`]
pub trait UploadedFile {
    /// Byte length of the file
    fn size(&self) -> u64;

    /// Declared MIME type, compared exactly against the allowed set
    fn mime_type(&self) -> &str;

    /// Original file name, if known
    fn file_name(&self) -> Option<&str> {
        None
    }
}

impl<T: UploadedFile + ?Sized> UploadedFile for &T {
    fn size(&self) -> u64 {
        (**self).size()
    }

    fn mime_type(&self) -> &str {
        (**self).mime_type()
    }

    fn file_name(&self) -> Option<&str> {
        (**self).file_name()
    }
}

/// File metadata as reported by an upload widget or read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// File name without directories
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// Declared MIME type
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Build a candidate from a file on disk.
    ///
    /// The MIME type comes from the extension; contents are never read.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::InvalidFile(format!(
                    "File not found: {}",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(Error::InvalidFile(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidFile("Invalid file name".to_string()))?;

        Ok(Self::new(name, metadata.len(), determine_content_type(path)))
    }
}

impl UploadedFile for FileCandidate {
    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn file_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Inspect several files concurrently, at most `max_concurrency` at a time.
///
/// Returns one result per path, in input order. A `max_concurrency` of zero is
/// treated as one.
pub async fn inspect_files<P: AsRef<Path>>(
    paths: &[P],
    max_concurrency: usize,
) -> Vec<Result<FileCandidate>> {
    let paths: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
    let mut results = Vec::with_capacity(paths.len());

    for chunk in paths.chunks(max_concurrency.max(1)) {
        let outcomes = future::join_all(chunk.iter().map(FileCandidate::from_path)).await;
        for (path, outcome) in chunk.iter().zip(&outcomes) {
            if let Err(e) = outcome {
                log::warn!("Skipping {}: {}", path.display(), e);
            }
        }
        results.extend(outcomes);
    }

    results
}
