use serde::{Deserialize, Serialize};

/// One commit-type shorthand: the title the user types and the text it expands to.
///
/// Entries are identified by their position in the owning list, so two entries
/// may carry identical content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasEntry {
    pub title: String,
    pub description: String,
}

impl AliasEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// An entry without a description is incomplete and gets flagged when rendered.
    pub fn needs_attention(&self) -> bool {
        self.description.is_empty()
    }
}
