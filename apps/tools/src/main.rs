use std::{io::Write, path::PathBuf};

use alias_table::{AliasTable, Column, HeadlessView, ViewAdapter};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use shared::{error::AliasError, settings::DataSettings};
use storage::SettingsStore;
use tracing_subscriber::EnvFilter;

mod config;
mod dialog;

use dialog::ArgsDialog;

#[derive(Parser, Debug)]
#[command(name = "alias-tool", about = "Edit the commit-type alias list")]
struct Cli {
    /// Settings file to edit; overrides config file and environment.
    #[arg(long)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Edit {
        row: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Remove {
        #[arg(required = true)]
        rows: Vec<usize>,
    },
    MoveUp {
        row: usize,
    },
    MoveDown {
        row: usize,
    },
    ResetDefaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut tool_settings = config::load_tool_settings();
    if let Some(path) = cli.settings {
        tool_settings.settings_path = path;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or_default(&tool_settings.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let store = SettingsStore::new(&tool_settings.settings_path);
    let mut settings = store.load()?;

    let mut table = AliasTable::new(HeadlessView::new());
    table.reset(&settings);

    let mut out = std::io::stdout().lock();
    run_command(&mut table, cli.command, &mut out)?;

    if table.is_modified(&settings) {
        table.apply(&mut settings);
        store.save(&settings)?;
    }

    Ok(())
}

/// A filter that does not parse is reported and replaced by `info`.
fn env_filter_or_default(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        // The subscriber is not up yet, so this goes straight to stderr.
        eprintln!("ignoring invalid log filter '{directives}': {err}");
        EnvFilter::new("info")
    })
}

fn run_command<W: Write>(
    table: &mut AliasTable<HeadlessView>,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List => print_rows(table, out)?,
        Command::Add { title, description } => {
            let mut dialog = ArgsDialog::new(Some(title), Some(description));
            match table.add_with(&mut dialog)? {
                Some(row) => writeln!(out, "added row {row}")?,
                None => return Err(rejection(&mut dialog)),
            }
        }
        Command::Edit {
            row,
            title,
            description,
        } => {
            select_row(table, row)?;
            let mut dialog = ArgsDialog::new(title, description);
            if !table.edit(&mut dialog) {
                bail!("row {row} could not be edited");
            }
            if let Some(err) = dialog.take_rejection() {
                return Err(err.into());
            }
            writeln!(out, "edited row {row}")?;
        }
        Command::Remove { rows } => {
            table.view_mut().set_selection_range(&rows);
            if table.view().selected_count() == 0 {
                bail!("none of the rows {rows:?} exist");
            }
            let removed = table.remove_selected();
            writeln!(out, "removed {removed} row(s)")?;
        }
        Command::MoveUp { row } => {
            select_row(table, row)?;
            report_move(table.move_up(), row, "top", table, out)?;
        }
        Command::MoveDown { row } => {
            select_row(table, row)?;
            report_move(table.move_down(), row, "bottom", table, out)?;
        }
        Command::ResetDefaults => {
            table.reset(&DataSettings::default());
            writeln!(out, "restored {} default aliases", table.row_count())?;
        }
    }
    Ok(())
}

fn select_row(table: &mut AliasTable<HeadlessView>, row: usize) -> Result<()> {
    if row >= table.row_count() {
        return Err(AliasError::RowOutOfRange {
            row,
            len: table.row_count(),
        }
        .into());
    }
    table.view_mut().set_selection(row);
    Ok(())
}

fn report_move<W: Write>(
    moved: bool,
    row: usize,
    edge: &str,
    table: &AliasTable<HeadlessView>,
    out: &mut W,
) -> Result<()> {
    if moved {
        let target = table.view().selected_index().unwrap_or(row);
        writeln!(out, "moved row {row} to {target}")?;
    } else {
        writeln!(out, "row {row} is already at the {edge}")?;
    }
    Ok(())
}

fn rejection(dialog: &mut ArgsDialog) -> anyhow::Error {
    match dialog.take_rejection() {
        Some(err) => err.into(),
        None => anyhow::anyhow!("input was cancelled"),
    }
}

fn print_rows<W: Write>(table: &AliasTable<HeadlessView>, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "  {:>3}  {:<12} {}",
        "#",
        table.column_name(Column::Title.index())?,
        table.column_name(Column::Description.index())?
    )?;
    for row in 0..table.row_count() {
        let marker = if table.needs_attention(row)? { '!' } else { ' ' };
        writeln!(
            out,
            "{marker} {row:>3}  {:<12} {}",
            table.value_at(row, Column::Title.index())?,
            table.value_at(row, Column::Description.index())?
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::AliasEntry;

    fn table_with(entries: Vec<AliasEntry>) -> AliasTable<HeadlessView> {
        let mut table = AliasTable::new(HeadlessView::new());
        table.reset(&entries);
        table
    }

    fn run(table: &mut AliasTable<HeadlessView>, command: Command) -> Result<String> {
        let mut out = Vec::new();
        run_command(table, command, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn invalid_log_filter_falls_back_to_info() {
        assert_eq!(env_filter_or_default("alias_table=loud").to_string(), "info");
        assert_eq!(env_filter_or_default("debug").to_string(), "debug");
    }

    #[test]
    fn cli_parses_remove_with_many_rows() {
        let cli = Cli::try_parse_from(["alias-tool", "remove", "1", "3"]).expect("parse");
        match cli.command {
            Command::Remove { rows } => assert_eq!(rows, vec![1, 3]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_marks_entries_without_description() {
        let mut table = table_with(vec![
            AliasEntry::new("feat", "A new feature"),
            AliasEntry::new("wip", ""),
        ]);
        let output = run(&mut table, Command::List).expect("list");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("Commit Type"));
        assert!(lines[1].starts_with(' '));
        assert!(lines[2].starts_with('!'));
        assert!(lines[2].contains("wip"));
    }

    #[test]
    fn add_rejects_blank_title() {
        let mut table = table_with(Vec::new());
        let err = run(
            &mut table,
            Command::Add {
                title: "  ".into(),
                description: "x".into(),
            },
        )
        .expect_err("blank title");
        assert_eq!(err.to_string(), "alias title must not be empty");
        assert!(table.is_empty());
    }

    #[test]
    fn edit_keeps_unspecified_fields() {
        let mut table = table_with(vec![AliasEntry::new("feat", "A new feature")]);
        run(
            &mut table,
            Command::Edit {
                row: 0,
                title: Some("feature".into()),
                description: None,
            },
        )
        .expect("edit");
        assert_eq!(table.aliases(), &[AliasEntry::new("feature", "A new feature")]);
    }

    #[test]
    fn edit_out_of_range_row_fails() {
        let mut table = table_with(vec![AliasEntry::new("feat", "A new feature")]);
        let err = run(
            &mut table,
            Command::Edit {
                row: 4,
                title: None,
                description: None,
            },
        )
        .expect_err("out of range");
        assert_eq!(err.to_string(), "row 4 is out of range for 1 aliases");
    }

    #[test]
    fn move_up_on_first_row_reports_edge() {
        let mut table = table_with(DataSettings::default_type_aliases());
        let output = run(&mut table, Command::MoveUp { row: 0 }).expect("move");
        assert_eq!(output, "row 0 is already at the top\n");
        assert!(!table.is_modified(&DataSettings::default()));

        let output = run(&mut table, Command::MoveDown { row: 0 }).expect("move");
        assert_eq!(output, "moved row 0 to 1\n");
        assert_eq!(table.aliases()[1].title, "feat");
    }

    #[test]
    fn remove_ignores_unknown_rows_but_needs_one_real_row() {
        let mut table = table_with(DataSettings::default_type_aliases());
        let output = run(&mut table, Command::Remove { rows: vec![1, 3, 40] }).expect("remove");
        assert_eq!(output, "removed 2 row(s)\n");
        assert_eq!(table.row_count(), 9);

        let err = run(&mut table, Command::Remove { rows: vec![40] }).expect_err("no rows");
        assert!(err.to_string().contains("none of the rows"));
    }

    #[test]
    fn reset_defaults_restores_stock_list() {
        let mut table = table_with(vec![AliasEntry::new("x", "")]);
        let output = run(&mut table, Command::ResetDefaults).expect("reset");
        assert_eq!(output, "restored 11 default aliases\n");
        assert!(!table.is_modified(&DataSettings::default()));
    }

    #[test]
    fn changes_persist_through_the_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::new(dir.path().join("aliases.json"));
        let mut settings = store.load().expect("load");
        let mut table = AliasTable::new(HeadlessView::new());
        table.reset(&settings);

        run(
            &mut table,
            Command::Add {
                title: "wip".into(),
                description: String::new(),
            },
        )
        .expect("add");
        assert!(table.is_modified(&settings));
        table.apply(&mut settings);
        store.save(&settings).expect("save");

        let reloaded = store.load().expect("reload");
        assert_eq!(reloaded.type_aliases().len(), 12);
        assert!(reloaded.type_aliases()[11].needs_attention());
    }
}
