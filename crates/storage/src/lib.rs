use anyhow::{Context, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use shared::settings::DataSettings;

/// JSON file holding the persisted [`DataSettings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the settings file; a missing file yields the stock defaults.
    pub fn load(&self) -> Result<DataSettings> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "settings file missing; using defaults");
                return Ok(DataSettings::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read settings file '{}'", self.path.display())
                })
            }
        };

        let settings: DataSettings = serde_json::from_str(&raw).with_context(|| {
            format!("failed to parse settings file '{}'", self.path.display())
        })?;
        tracing::debug!(
            path = %self.path.display(),
            aliases = settings.type_aliases.len(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Writes to a sibling temp file, then renames it over the target.
    pub fn save(&self, settings: &DataSettings) -> Result<()> {
        ensure_parent_dir_exists(&self.path)?;

        let serialized =
            serde_json::to_string_pretty(settings).context("failed to serialize settings")?;
        let temp_path = temp_path_for(&self.path);
        fs::write(&temp_path, serialized).with_context(|| {
            format!("failed to write temp settings file '{}'", temp_path.display())
        })?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                tracing::warn!(
                    path = %temp_path.display(),
                    %cleanup,
                    "failed to remove temp settings file"
                );
            }
            return Err(err).with_context(|| {
                format!(
                    "failed to move '{}' into place at '{}'",
                    temp_path.display(),
                    self.path.display()
                )
            });
        }

        tracing::info!(
            path = %self.path.display(),
            aliases = settings.type_aliases.len(),
            "saved settings"
        );
        Ok(())
    }
}

fn ensure_parent_dir_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for settings file '{}'",
            parent.display(),
            path.display()
        )
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
