//! Modal entry dialog contract used to collect a title/description pair.

use shared::{domain::AliasEntry, error::AliasError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Add,
    Edit,
}

impl DialogKind {
    pub fn label(self) -> &'static str {
        match self {
            DialogKind::Add => "Add CommitType",
            DialogKind::Edit => "Edit CommitType",
        }
    }
}

/// What the dialog should open with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRequest<'a> {
    pub kind: DialogKind,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> DialogRequest<'a> {
    pub fn add() -> DialogRequest<'static> {
        DialogRequest {
            kind: DialogKind::Add,
            title: "",
            description: "",
        }
    }

    pub fn edit(entry: &'a AliasEntry) -> Self {
        Self {
            kind: DialogKind::Edit,
            title: &entry.title,
            description: &entry.description,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// A confirmed title/description pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDraft {
    pub title: String,
    pub description: String,
}

impl AliasDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn from_request(request: &DialogRequest<'_>) -> Self {
        Self::new(request.title, request.description)
    }

    /// Dialogs call this before confirming; a blank title cannot be looked up later.
    pub fn validate(&self) -> Result<(), AliasError> {
        if self.title.trim().is_empty() {
            return Err(AliasError::EmptyTitle);
        }
        Ok(())
    }
}

pub trait EntryDialog {
    /// Blocks until the user confirms (`Some`) or cancels (`None`).
    fn show(&mut self, request: DialogRequest<'_>) -> Option<AliasDraft>;
}

impl<F> EntryDialog for F
where
    F: FnMut(DialogRequest<'_>) -> Option<AliasDraft>,
{
    fn show(&mut self, request: DialogRequest<'_>) -> Option<AliasDraft> {
        self(request)
    }
}
