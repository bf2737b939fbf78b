//! Non-interactive entry dialog fed from command-line arguments.

use alias_table::{AliasDraft, DialogRequest, EntryDialog};
use shared::error::AliasError;

/// Fields left unset keep the dialog's initial values. Invalid input counts as a
/// cancellation; the reason is kept for the caller.
#[derive(Debug, Default)]
pub struct ArgsDialog {
    title: Option<String>,
    description: Option<String>,
    rejected: Option<AliasError>,
}

impl ArgsDialog {
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self {
            title,
            description,
            rejected: None,
        }
    }

    pub fn take_rejection(&mut self) -> Option<AliasError> {
        self.rejected.take()
    }
}

impl EntryDialog for ArgsDialog {
    fn show(&mut self, request: DialogRequest<'_>) -> Option<AliasDraft> {
        let mut draft = AliasDraft::from_request(&request);
        if let Some(title) = self.title.take() {
            draft.title = title;
        }
        if let Some(description) = self.description.take() {
            draft.description = description;
        }

        match draft.validate() {
            Ok(()) => {
                tracing::debug!(dialog = request.label(), title = %draft.title, "confirmed");
                Some(draft)
            }
            Err(err) => {
                tracing::warn!(dialog = request.label(), %err, "rejecting input");
                self.rejected = Some(err);
                None
            }
        }
    }
}
