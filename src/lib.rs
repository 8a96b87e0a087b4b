//! # formguard
//!
//! Upload limits and draft state for an image submission form: a category,
//! a title, a description and a bounded list of images.
//!
//! An [`UploadPolicy`] holds the limits (maximum file size, allowed MIME types,
//! maximum file count). It is built once and passed to whatever validates
//! files; it never changes afterwards. A [`FormDraft`] only admits images the
//! policy accepts, and a turned-away file comes back as a [`Rejection`] value.
//!
//! ## Basic Usage Example
//!
//! ```
//! use formguard::{FileCandidate, FormDraft, Rejection, UploadPolicy};
//!
//! let policy = UploadPolicy::new(5 * 1024 * 1024, ["image/jpeg", "image/png"], 3)?;
//! let mut draft = FormDraft::new();
//!
//! draft.add_image(&policy, FileCandidate::new("pier.png", 1_048_576, "image/png"))
//!     .expect("png under the limit is accepted");
//!
//! let rejected = draft.add_image(&policy, FileCandidate::new("loop.gif", 1_048_576, "image/gif"));
//! assert!(matches!(rejected, Err(Rejection::UnsupportedType { .. })));
//!
//! draft.set_category("landscape");
//! draft.set_title("Harbour at dusk");
//! draft.set_description("Taken from the pier");
//! let submission = draft.submit()?;
//! assert_eq!(submission.images.len(), 1);
//! # Ok::<(), formguard::Error>(())
//! ```
//!
//! ## Loading a Policy
//!
//! ```no_run
//! use formguard::UploadPolicy;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let policy = UploadPolicy::load("upload_policy.json").await?;
//!     println!("Up to {} files of {} bytes", policy.max_count(), policy.max_size_bytes());
//!     Ok(())
//! }
//! ```

mod config;
mod draft;
mod error;
mod file;
mod models;
pub mod utils;

// Re-exports
pub use config::{UploadPolicy, DEFAULT_ALLOWED_TYPES, DEFAULT_MAX_COUNT, DEFAULT_MAX_SIZE_BYTES};
pub use draft::FormDraft;
pub use error::{Error, Result};
pub use file::{inspect_files, FileCandidate, UploadedFile};
pub use models::{Accepted, Rejection, RejectionReason, Submission, SubmittedImage};
