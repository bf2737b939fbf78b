//! Alias list controller: owns the ordered commit-type aliases and keeps a table view in sync.

pub mod dialog;
pub mod events;
pub mod model;
pub mod table;
pub mod view;

pub use dialog::{AliasDraft, DialogKind, DialogRequest, EntryDialog};
pub use events::{ChannelView, TableEvent};
pub use model::{CellStyle, Column};
pub use table::{AliasTable, SettingsSource};
pub use view::{HeadlessView, SelectionModel, ViewAdapter};
