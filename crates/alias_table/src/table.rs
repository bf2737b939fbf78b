use shared::{domain::AliasEntry, error::AliasError, settings::DataSettings};

use crate::{
    dialog::{DialogRequest, EntryDialog},
    model::{self, CellStyle, Column, COLUMN_COUNT},
    view::ViewAdapter,
};

/// Anything that can hand over an ordered alias list, usually persisted settings.
pub trait SettingsSource {
    fn type_aliases(&self) -> &[AliasEntry];
}

impl SettingsSource for DataSettings {
    fn type_aliases(&self) -> &[AliasEntry] {
        DataSettings::type_aliases(self)
    }
}

impl SettingsSource for [AliasEntry] {
    fn type_aliases(&self) -> &[AliasEntry] {
        self
    }
}

impl SettingsSource for Vec<AliasEntry> {
    fn type_aliases(&self) -> &[AliasEntry] {
        self
    }
}

/// Owns the alias list and drives the view after every structural change.
///
/// The view is notified before any selection is redirected, so the row count it
/// holds always matches the list once an operation returns.
pub struct AliasTable<V> {
    aliases: Vec<AliasEntry>,
    view: V,
}

impl<V: ViewAdapter> AliasTable<V> {
    pub fn new(view: V) -> Self {
        Self {
            aliases: Vec::new(),
            view,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    pub fn snapshot(&self) -> Vec<AliasEntry> {
        self.aliases.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// First entry carrying `title`; duplicates are allowed.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.aliases.iter().position(|entry| entry.title == title)
    }

    /// Appends an entry and selects it by looking its title back up.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<usize, AliasError> {
        let title = title.into();
        self.aliases.push(AliasEntry::new(title.clone(), description));
        self.notify_data_changed();

        let index = self.index_of(&title);
        debug_assert!(index.is_some(), "alias '{title}' missing right after insert");
        let Some(index) = index else {
            tracing::error!(title = %title, "added alias not found by title");
            return Err(AliasError::MissingAfterInsert { title });
        };

        self.view.set_selection(index);
        tracing::debug!(row = index, title = %title, "added alias");
        Ok(index)
    }

    /// Collects a new entry through `dialog`. `Ok(None)` means the user cancelled.
    pub fn add_with<D>(&mut self, dialog: &mut D) -> Result<Option<usize>, AliasError>
    where
        D: EntryDialog + ?Sized,
    {
        let Some(draft) = dialog.show(DialogRequest::add()) else {
            tracing::debug!("add alias cancelled");
            return Ok(None);
        };
        self.add(draft.title, draft.description).map(Some)
    }

    /// Edits the single selected entry in place.
    ///
    /// Returns false without touching anything unless exactly one row is
    /// selected; a cancelled dialog still returns true.
    pub fn edit<D>(&mut self, dialog: &mut D) -> bool
    where
        D: EntryDialog + ?Sized,
    {
        if self.view.selected_count() != 1 {
            return false;
        }
        let Some(row) = self.view.selected_index() else {
            return false;
        };
        let Some(entry) = self.aliases.get(row) else {
            tracing::warn!(row, len = self.aliases.len(), "selected row is stale; skipping edit");
            return false;
        };

        let Some(draft) = dialog.show(DialogRequest::edit(entry)) else {
            tracing::debug!(row, "edit alias cancelled");
            return true;
        };

        let entry = &mut self.aliases[row];
        entry.title = draft.title;
        entry.description = draft.description;
        self.notify_data_changed();
        self.view.set_selection(row);
        tracing::debug!(row, "edited alias");
        true
    }

    /// Swaps the selected entry with its predecessor. The first row stays put.
    pub fn move_up(&mut self) -> bool {
        match self.view.selected_index() {
            Some(row) if row > 0 && row < self.aliases.len() => self.swap_rows(row, row - 1),
            _ => false,
        }
    }

    /// Swaps the selected entry with its successor. The last row stays put.
    pub fn move_down(&mut self) -> bool {
        match self.view.selected_index() {
            Some(row) if row < self.aliases.len() && row + 1 < self.aliases.len() => {
                self.swap_rows(row, row + 1)
            }
            _ => false,
        }
    }

    fn swap_rows(&mut self, from: usize, to: usize) -> bool {
        self.aliases.swap(from, to);
        self.notify_data_changed();
        self.view.set_selection(to);
        tracing::debug!(from, to, "moved alias");
        true
    }

    /// Removes every selected row and returns how many were removed.
    ///
    /// Rows are deleted highest first; indices no longer valid for the shrinking
    /// list are skipped. Afterwards the lowest originally selected row is
    /// reselected if it still exists, else the new last row.
    pub fn remove_selected(&mut self) -> usize {
        let mut rows = self.view.selected_indices();
        if rows.is_empty() {
            return 0;
        }
        rows.sort_unstable();
        rows.dedup();
        let original_row = rows[0];

        let mut removed = 0;
        for &row in rows.iter().rev() {
            if row < self.aliases.len() {
                self.aliases.remove(row);
                removed += 1;
            } else {
                tracing::debug!(row, "skipping stale selected row");
            }
        }
        self.notify_data_changed();

        if original_row < self.aliases.len() {
            self.view.set_selection(original_row);
        } else if let Some(last) = self.aliases.len().checked_sub(1) {
            self.view.set_selection(last);
        } else {
            self.view.clear_selection();
        }

        tracing::debug!(removed, remaining = self.aliases.len(), "removed aliases");
        removed
    }

    /// Replaces the whole list with a copy of `source`, keeping its order.
    pub fn reset<S>(&mut self, source: &S)
    where
        S: SettingsSource + ?Sized,
    {
        self.aliases.clear();
        self.aliases.extend_from_slice(source.type_aliases());
        self.notify_data_changed();
        tracing::debug!(count = self.aliases.len(), "reset aliases from settings");
    }

    pub fn is_modified<S>(&self, source: &S) -> bool
    where
        S: SettingsSource + ?Sized,
    {
        self.aliases.as_slice() != source.type_aliases()
    }

    pub fn apply(&self, settings: &mut DataSettings) {
        settings.type_aliases = self.aliases.clone();
    }

    pub fn row_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn column_count(&self) -> usize {
        COLUMN_COUNT
    }

    pub fn column_name(&self, column: usize) -> Result<&'static str, AliasError> {
        Ok(Self::column(column)?.header())
    }

    pub fn value_at(&self, row: usize, column: usize) -> Result<&str, AliasError> {
        let column = Self::column(column)?;
        Ok(column.value(self.entry(row)?))
    }

    pub fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        false
    }

    /// Recomputed from the entry on every call; never cached.
    pub fn cell_style(
        &self,
        row: usize,
        column: usize,
        selected: bool,
    ) -> Result<CellStyle, AliasError> {
        let column = Self::column(column)?;
        Ok(model::cell_style(self.entry(row)?, column, selected))
    }

    pub fn needs_attention(&self, row: usize) -> Result<bool, AliasError> {
        Ok(self.entry(row)?.needs_attention())
    }

    fn entry(&self, row: usize) -> Result<&AliasEntry, AliasError> {
        self.aliases.get(row).ok_or(AliasError::RowOutOfRange {
            row,
            len: self.aliases.len(),
        })
    }

    fn column(index: usize) -> Result<Column, AliasError> {
        Column::from_index(index).ok_or_else(|| {
            tracing::error!(column = index, "wrong column index");
            AliasError::UnknownColumn(index)
        })
    }

    fn notify_data_changed(&mut self) {
        self.view.notify_data_changed(self.aliases.len());
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
