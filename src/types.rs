use serde::{Deserialize, Serialize};

use crate::constants;

/// A story shared through the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub story: String,
    /// Batch, branch and year of the author; may be empty.
    pub identifier: String,
}

impl Testimonial {
    pub fn new(story: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self { story: story.into(), identifier: identifier.into() }
    }

    /// Sentinel shown in place of the stories when the sheet cannot be read.
    pub fn unavailable() -> Self {
        Self::new(constants::STORIES_UNAVAILABLE, "")
    }

    pub fn is_unavailable(&self) -> bool {
        self.story == constants::STORIES_UNAVAILABLE && self.identifier.is_empty()
    }
}

/// A senior who agreed to be contacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub batch_info: String,
    pub email: String,
    pub linkedin: String,
    pub phone: String,
}

/// Which rows count as a displayable story.
///
/// The two views historically disagree: the highlight view also rejects
/// stories spelled `nan` in any case, the full list only rejects empty ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryPolicy {
    /// Index page: non-empty and not case-insensitively `nan`.
    Highlight,
    /// All-stories page: non-empty.
    FullList,
}
