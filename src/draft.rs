use crate::config::UploadPolicy;
use crate::error::{Error, Result};
use crate::file::{FileCandidate, UploadedFile};
use crate::models::{Accepted, Rejection, Submission, SubmittedImage};

/// Form data a user is composing before submission.
///
/// Images only enter through [`FormDraft::add_image`] or
/// [`FormDraft::add_images`], so the image count never exceeds the policy's
/// `max_count` and every image passed the policy when it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft<F = FileCandidate> {
    category: String,
    title: String,
    description: String,
    images: Vec<F>,
}

impl<F> Default for FormDraft<F> {
    fn default() -> Self {
        Self {
            category: String::new(),
            title: String::new(),
            description: String::new(),
            images: Vec::new(),
        }
    }
}

impl<F: UploadedFile> FormDraft<F> {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the category
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Entry title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Free-text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Attached images in insertion order
    pub fn images(&self) -> &[F] {
        &self.images
    }

    /// How many more files `policy` would admit by count alone
    pub fn remaining_slots(&self, policy: &UploadPolicy) -> usize {
        policy.max_count().saturating_sub(self.images.len())
    }

    /// Attach `file` if the policy accepts it; a rejected file is dropped.
    pub fn add_image(
        &mut self,
        policy: &UploadPolicy,
        file: F,
    ) -> std::result::Result<Accepted, Rejection> {
        match policy.is_acceptable(&file, self.images.len()) {
            Ok(accepted) => {
                self.images.push(file);
                Ok(accepted)
            }
            Err(rejection) => {
                log::debug!(
                    "Rejected {}: {}",
                    file.file_name().unwrap_or("<unnamed>"),
                    rejection
                );
                Err(rejection)
            }
        }
    }

    /// Attach several files in order, as a multi-select upload would.
    ///
    /// Each file is checked against the count reached so far. Returns one
    /// outcome per input file.
    pub fn add_images<I>(
        &mut self,
        policy: &UploadPolicy,
        files: I,
    ) -> Vec<std::result::Result<Accepted, Rejection>>
    where
        I: IntoIterator<Item = F>,
    {
        files
            .into_iter()
            .map(|file| self.add_image(policy, file))
            .collect()
    }

    /// Detach the image at `index`, if any
    pub fn remove_image(&mut self, index: usize) -> Option<F> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Detach every image, freeing all slots
    pub fn clear_images(&mut self) {
        self.images.clear();
    }

    /// Finish the draft, requiring category, title and description.
    pub fn submit(self) -> Result<Submission> {
        let category = required("category", self.category)?;
        let title = required("title", self.title)?;
        let description = required("description", self.description)?;

        let images = self
            .images
            .iter()
            .map(|image| SubmittedImage {
                name: image.file_name().map(str::to_string),
                size: image.size(),
                mime_type: image.mime_type().to_string(),
            })
            .collect();

        Ok(Submission {
            category,
            title,
            description,
            images,
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(value)
}
