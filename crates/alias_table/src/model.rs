//! Fixed two-column schema the table view reads cells through.

use shared::domain::AliasEntry;

pub const COLUMN_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Description,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [Column::Title, Column::Description];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Column::Title),
            1 => Some(Column::Description),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Column::Title => 0,
            Column::Description => 1,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Commit Type",
            Column::Description => "Commit Description",
        }
    }

    pub fn value(self, entry: &AliasEntry) -> &str {
        match self {
            Column::Title => &entry.title,
            Column::Description => &entry.description,
        }
    }
}

/// Foreground a renderer should use for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Normal,
    Selected,
    Alert,
}

/// Title cells of incomplete entries are flagged regardless of selection.
pub fn cell_style(entry: &AliasEntry, column: Column, selected: bool) -> CellStyle {
    match column {
        Column::Title if entry.needs_attention() => CellStyle::Alert,
        _ if selected => CellStyle::Selected,
        _ => CellStyle::Normal,
    }
}
