use serde::{Deserialize, Serialize};

use crate::domain::AliasEntry;

const DEFAULT_TYPE_ALIASES: &[(&str, &str)] = &[
    ("feat", "A new feature"),
    ("fix", "A bug fix"),
    ("docs", "Documentation only changes"),
    (
        "style",
        "Changes that do not affect the meaning of the code (white-space, formatting, etc)",
    ),
    (
        "refactor",
        "A code change that neither fixes a bug nor adds a feature",
    ),
    ("perf", "A code change that improves performance"),
    ("test", "Adding missing tests or correcting existing tests"),
    (
        "build",
        "Changes that affect the build system or external dependencies",
    ),
    ("ci", "Changes to our CI configuration files and scripts"),
    (
        "chore",
        "Other changes that don't modify src or test files",
    ),
    ("revert", "Reverts a previous commit"),
];

/// Persisted plugin settings; the canonical source of the alias list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub type_aliases: Vec<AliasEntry>,
}

impl DataSettings {
    pub fn default_type_aliases() -> Vec<AliasEntry> {
        DEFAULT_TYPE_ALIASES
            .iter()
            .map(|(title, description)| AliasEntry::new(*title, *description))
            .collect()
    }

    pub fn type_aliases(&self) -> &[AliasEntry] {
        &self.type_aliases
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            type_aliases: Self::default_type_aliases(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DataSettings;

    #[test]
    fn defaults_start_with_feat_and_fix() {
        let settings = DataSettings::default();
        let titles: Vec<&str> = settings
            .type_aliases()
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(&titles[..2], &["feat", "fix"]);
        assert_eq!(titles.len(), 11);
        assert!(settings.type_aliases().iter().all(|e| !e.needs_attention()));
    }

    #[test]
    fn missing_field_falls_back_to_defaults() {
        let settings: DataSettings = serde_json::from_str("{}").expect("parse");
        assert_eq!(settings, DataSettings::default());
    }

    #[test]
    fn explicit_empty_list_is_kept() {
        let settings: DataSettings =
            serde_json::from_str(r#"{"type_aliases":[]}"#).expect("parse");
        assert!(settings.type_aliases().is_empty());
    }
}
