//! View-side contract the controller notifies after every mutation.

use std::collections::BTreeSet;

/// Implemented by whatever renders the alias table. Selection lives in the view;
/// the controller only reads and redirects it.
pub trait ViewAdapter {
    /// The list changed; the view must re-read row count and every cell.
    fn notify_data_changed(&mut self, row_count: usize);

    fn selected_indices(&self) -> Vec<usize>;

    fn set_selection(&mut self, row: usize);

    fn set_selection_range(&mut self, rows: &[usize]);

    fn clear_selection(&mut self);

    /// Lowest selected row, the one single-row operations act on.
    fn selected_index(&self) -> Option<usize> {
        self.selected_indices().into_iter().min()
    }

    fn selected_count(&self) -> usize {
        self.selected_indices().len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    rows: BTreeSet<usize>,
}

impl SelectionModel {
    pub fn rows(&self) -> Vec<usize> {
        self.rows.iter().copied().collect()
    }

    pub fn lead(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn select_only(&mut self, row: usize) {
        self.rows.clear();
        self.rows.insert(row);
    }

    pub fn select_rows(&mut self, rows: &[usize]) {
        self.rows = rows.iter().copied().collect();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Drops rows that no longer exist. Returns true when anything was dropped.
    pub fn retain_below(&mut self, row_count: usize) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| *row < row_count);
        self.rows.len() != before
    }
}

/// In-memory view with no rendering, used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct HeadlessView {
    selection: SelectionModel,
    row_count: usize,
    data_changes: usize,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of data-changed notifications received so far.
    pub fn data_changes(&self) -> usize {
        self.data_changes
    }
}

impl ViewAdapter for HeadlessView {
    fn notify_data_changed(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.data_changes += 1;
        self.selection.retain_below(row_count);
    }

    fn selected_indices(&self) -> Vec<usize> {
        self.selection.rows()
    }

    fn set_selection(&mut self, row: usize) {
        if row >= self.row_count {
            tracing::warn!(row, row_count = self.row_count, "ignoring out-of-range selection");
            return;
        }
        self.selection.select_only(row);
    }

    fn set_selection_range(&mut self, rows: &[usize]) {
        let valid: Vec<usize> = rows
            .iter()
            .copied()
            .filter(|row| *row < self.row_count)
            .collect();
        if valid.len() != rows.len() {
            tracing::warn!(
                requested = rows.len(),
                kept = valid.len(),
                "dropping out-of-range rows from selection"
            );
        }
        self.selection.select_rows(&valid);
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn selected_index(&self) -> Option<usize> {
        self.selection.lead()
    }

    fn selected_count(&self) -> usize {
        self.selection.len()
    }
}
