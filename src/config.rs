use crate::error::{Error, Result};
use crate::file::UploadedFile;
use crate::models::{Accepted, Rejection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Default maximum size of a single file (5 MB)
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Default MIME types accepted by the form
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Default maximum number of files per form
pub const DEFAULT_MAX_COUNT: usize = 3;

/// Limits governing which files a form may accept.
///
/// A policy is validated when it is built and cannot be changed afterwards,
/// so one value can be shared by every form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PolicyFile")]
pub struct UploadPolicy {
    max_size_bytes: u64,
    allowed_types: BTreeSet<String>,
    max_count: usize,
}

/// On-disk shape of a policy; absent keys fall back to the defaults
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PolicyFile {
    max_size_bytes: u64,
    allowed_types: Vec<String>,
    max_count: usize,
}

impl Default for PolicyFile {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| t.to_string()).collect(),
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

impl TryFrom<PolicyFile> for UploadPolicy {
    type Error = Error;

    fn try_from(file: PolicyFile) -> Result<Self> {
        UploadPolicy::new(file.max_size_bytes, file.allowed_types, file.max_count)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        let defaults = PolicyFile::default();
        Self {
            max_size_bytes: defaults.max_size_bytes,
            allowed_types: defaults.allowed_types.into_iter().collect(),
            max_count: defaults.max_count,
        }
    }
}

impl UploadPolicy {
    /// Build a policy, rejecting limits that could never accept a file
    pub fn new<I, S>(max_size_bytes: u64, allowed_types: I, max_count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed_types: BTreeSet<String> = allowed_types.into_iter().map(Into::into).collect();

        if max_size_bytes == 0 {
            return Err(Error::InvalidConfig(
                "maxSizeBytes must be positive".to_string(),
            ));
        }

        if max_count == 0 {
            return Err(Error::InvalidConfig("maxCount must be positive".to_string()));
        }

        if allowed_types.is_empty() {
            return Err(Error::InvalidConfig(
                "allowedTypes cannot be empty".to_string(),
            ));
        }

        if let Some(blank) = allowed_types.iter().find(|t| t.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "allowedTypes contains a blank entry: {blank:?}"
            )));
        }

        Ok(Self {
            max_size_bytes,
            allowed_types,
            max_count,
        })
    }

    /// Parse a policy from JSON such as
    /// `{"maxSizeBytes": 5242880, "allowedTypes": ["image/png"], "maxCount": 3}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a policy from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let policy = Self::from_json(&contents)?;
        log::info!(
            "Upload policy loaded from {}: max {} bytes, {} types, max {} files",
            path.display(),
            policy.max_size_bytes,
            policy.allowed_types.len(),
            policy.max_count
        );
        Ok(policy)
    }

    /// Inclusive upper bound on a single file's byte length
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// MIME types accepted, matched exactly
    pub fn allowed_types(&self) -> &BTreeSet<String> {
        &self.allowed_types
    }

    /// Upper bound on files attached to one form
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Whether `mime_type` is in the allowed set (case-sensitive)
    pub fn allows_type(&self, mime_type: &str) -> bool {
        self.allowed_types.contains(mime_type)
    }

    /// Decide whether `file` may join a form that already holds `current_count` files.
    ///
    /// Checks run in order: size, type, count. The first failing check is reported.
    pub fn is_acceptable<F: UploadedFile>(
        &self,
        file: &F,
        current_count: usize,
    ) -> std::result::Result<Accepted, Rejection> {
        let size = file.size();
        if size > self.max_size_bytes {
            return Err(Rejection::TooLarge {
                size,
                max_size_bytes: self.max_size_bytes,
            });
        }

        if !self.allows_type(file.mime_type()) {
            return Err(Rejection::UnsupportedType {
                mime_type: file.mime_type().to_string(),
            });
        }

        if current_count >= self.max_count {
            return Err(Rejection::TooManyFiles {
                max_count: self.max_count,
            });
        }

        Ok(Accepted)
    }
}
