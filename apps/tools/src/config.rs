use std::{fs, path::PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "alias-tool.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    pub settings_path: PathBuf,
    pub log_filter: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    settings_path: Option<PathBuf>,
    log_filter: Option<String>,
}

fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("commit_alias"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aliases.json")
}

/// Defaults, then `alias-tool.toml` in the working directory, then the environment.
pub fn load_tool_settings() -> ToolSettings {
    let mut settings = ToolSettings::default();

    if let Ok(raw) = fs::read_to_string(CONFIG_FILE) {
        apply_file_config(&mut settings, &raw);
    }
    apply_env(&mut settings, |name| std::env::var(name).ok());

    settings
}

fn apply_file_config(settings: &mut ToolSettings, raw: &str) {
    let file_cfg = match toml::from_str::<FileConfig>(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            // The subscriber is not up yet, so this goes straight to stderr.
            eprintln!("ignoring malformed {CONFIG_FILE}: {err}");
            return;
        }
    };

    if let Some(v) = file_cfg.settings_path {
        settings.settings_path = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
}

fn apply_env(settings: &mut ToolSettings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("ALIAS_SETTINGS_PATH") {
        settings.settings_path = PathBuf::from(v);
    }
    if let Some(v) = non_empty("APP__SETTINGS_PATH") {
        settings.settings_path = PathBuf::from(v);
    }

    if let Some(v) = non_empty("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}
