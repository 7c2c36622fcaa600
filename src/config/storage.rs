//! Persistence for the config file under the user's config directory.

use super::{CONFIG_VERSION, ConfigState};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for prtree metadata within the config base.
const APP_DIR: &str = "prtree";

/// Filename for the config state.
const CONFIG_FILE: &str = "config.toml";

/// Get path to the config file under `base` (usually the platform config
/// directory).
pub fn config_path(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// Load config state from disk.
///
/// Returns a default `ConfigState` if the file doesn't exist.
pub fn load_config(base: &Path) -> Result<ConfigState> {
    let path = config_path(base);

    if !path.exists() {
        return Ok(ConfigState::new());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let state: ConfigState = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(state)
}

/// Save config state to disk.
///
/// Creates the `prtree/` directory if it doesn't exist.
pub fn save_config(base: &Path, state: &ConfigState) -> Result<()> {
    let dir = base.join(APP_DIR);
    let path = dir.join(CONFIG_FILE);

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .map_err(|e| Error::Config(format!("failed to create {}: {e}", dir.display())))?;
    }

    // Serialize with version
    let mut state_to_save = state.clone();
    state_to_save.version = CONFIG_VERSION;

    let content = toml::to_string_pretty(&state_to_save)
        .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;

    // Add header comment
    let content_with_header = format!(
        "# prtree configuration\n# Auto-generated - manual edits may be overwritten\n\n{content}"
    );

    fs::write(&path, content_with_header)
        .map_err(|e| Error::Config(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let temp = TempDir::new().unwrap();
        let path = config_path(temp.path());
        assert!(path.ends_with("prtree/config.toml"));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let state = load_config(temp.path()).unwrap();
        assert!(state.token.is_none());
        assert_eq!(state.version, CONFIG_VERSION);
    }

    #[test]
    fn test_save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let app_dir = temp.path().join("prtree");
        assert!(!app_dir.exists());

        let state = ConfigState::new();
        save_config(temp.path(), &state).unwrap();

        assert!(app_dir.exists());
        assert!(config_path(temp.path()).exists());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let temp = TempDir::new().unwrap();

        let mut state = ConfigState::new();
        state.set_token("ghp_example");

        save_config(temp.path(), &state).unwrap();

        let loaded = load_config(temp.path()).unwrap();
        assert_eq!(loaded.token.as_deref(), Some("ghp_example"));
        assert!(loaded.updated_at.is_some());
        assert_eq!(loaded.version, CONFIG_VERSION);
    }

    #[test]
    fn test_file_contains_header_comment() {
        let temp = TempDir::new().unwrap();
        let state = ConfigState::new();
        save_config(temp.path(), &state).unwrap();

        let content = fs::read_to_string(config_path(temp.path())).unwrap();
        assert!(content.starts_with("# prtree configuration"));
        assert!(content.contains("Auto-generated"));
    }
}
