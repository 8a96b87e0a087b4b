use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker returned when a candidate file satisfies the upload policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted;

/// Why a candidate file was turned away.
///
/// Rejection is an expected outcome handed back to the caller, which decides
/// how to present it. It carries the numbers needed for a user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// File is larger than the policy allows
    #[error("File size {size} bytes exceeds the limit of {max_size_bytes} bytes")]
    TooLarge { size: u64, max_size_bytes: u64 },

    /// Declared MIME type is not in the allowed set
    #[error("Unsupported file type: {mime_type}")]
    UnsupportedType { mime_type: String },

    /// Draft already holds the maximum number of files
    #[error("Too many files: at most {max_count} may be attached")]
    TooManyFiles { max_count: usize },
}

/// Bare tag of a [`Rejection`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    TooLarge,
    UnsupportedType,
    TooManyFiles,
}

impl Rejection {
    /// The kind of rejection without its details
    pub fn reason(&self) -> RejectionReason {
        match self {
            Rejection::TooLarge { .. } => RejectionReason::TooLarge,
            Rejection::UnsupportedType { .. } => RejectionReason::UnsupportedType,
            Rejection::TooManyFiles { .. } => RejectionReason::TooManyFiles,
        }
    }
}

/// Metadata of one image in a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmittedImage {
    /// Original file name, when the handle knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Size in bytes
    pub size: u64,

    /// Declared MIME type
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// A completed form, produced by [`crate::FormDraft::submit`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Submission {
    pub category: String,
    pub title: String,
    pub description: String,

    /// Images in the order they were attached
    #[serde(default)]
    pub images: Vec<SubmittedImage>,
}
