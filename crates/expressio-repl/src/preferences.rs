//! Persisted user preferences

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use expressio::Language;
use serde::{Deserialize, Serialize};

/// Settings that survive between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Interface language, which also picks the decimal separator
    pub language: Language,
}

impl Preferences {
    /// Read preferences from `path`.
    ///
    /// A missing file is created with the defaults. A file that exists but
    /// does not parse is ignored with a warning, so a bad edit never stops
    /// the program from starting.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let defaults = Self::default();
            defaults.save(path)?;
            return Ok(defaults);
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        match serde_json::from_str(&text) {
            Ok(preferences) => Ok(preferences),
            Err(err) => {
                log::warn!("ignoring unreadable {}: {}", path.display(), err);
                Ok(Self::default())
            }
        }
    }

    /// Write preferences to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to encode preferences")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("saved preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("expressio-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let path = scratch("prefs-missing.json");
        let _ = fs::remove_file(&path);

        let preferences = Preferences::load_or_create(&path).unwrap();
        assert_eq!(preferences, Preferences::default());
        assert!(path.exists());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("prefs-roundtrip.json");
        let preferences = Preferences {
            language: Language::Portuguese,
        };
        preferences.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"portuguese\""));
        assert_eq!(Preferences::load_or_create(&path).unwrap(), preferences);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let path = scratch("prefs-garbage.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(
            Preferences::load_or_create(&path).unwrap(),
            Preferences::default()
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_field_uses_default() {
        let path = scratch("prefs-empty-object.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(
            Preferences::load_or_create(&path).unwrap().language,
            Language::English
        );
        fs::remove_file(&path).unwrap();
    }
}
