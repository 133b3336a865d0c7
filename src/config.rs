//! Settings file.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/keypad/config.toml` on Linux). The file is optional and every
//! key in it is optional; anything left out keeps its default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::calculator::{MAX_ENTRY_DIGITS_LIMIT, Settings};
use crate::error::ConfigError;

const APP_DIR: &str = "keypad";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Most history entries a config may ask for.
pub const MAX_HISTORY_LIMIT: usize = 1000;

/// Where the config file is looked for when no path is given.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let settings: Settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&settings)?;

    tracing::debug!(path = %path.display(), ?settings, "Loaded config");
    Ok(settings)
}

/// Check that settings are within the ranges the engine supports.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.history_limit > MAX_HISTORY_LIMIT {
        return Err(ConfigError::Invalid {
            field: "history_limit",
            reason: format!("must be at most {}", MAX_HISTORY_LIMIT),
        });
    }

    if !(1..=MAX_ENTRY_DIGITS_LIMIT).contains(&settings.max_entry_digits) {
        return Err(ConfigError::Invalid {
            field: "max_entry_digits",
            reason: format!("must be between 1 and {}", MAX_ENTRY_DIGITS_LIMIT),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{ClearMode, UndefinedResult};
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
            history_limit = 10
            max_entry_digits = 12
            clear_mode = "pending"
            undefined_result = "ignore"
            all_clear_resets_memory = true
            "#,
        );
        let settings = load_settings(file.path()).unwrap();

        assert_eq!(settings.history_limit, 10);
        assert_eq!(settings.max_entry_digits, 12);
        assert_eq!(settings.clear_mode, ClearMode::Pending);
        assert_eq!(settings.undefined_result, UndefinedResult::Ignore);
        assert!(settings.all_clear_resets_memory);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("history_limit = 10\n");
        let settings = load_settings(file.path()).unwrap();

        assert_eq!(settings.history_limit, 10);
        assert_eq!(settings.clear_mode, ClearMode::Entry);
        assert_eq!(settings.undefined_result, UndefinedResult::Zero);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config("theme = \"dark\"\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_bad_enum_value_rejected() {
        let file = write_config("clear_mode = \"everything\"\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let file = write_config("max_entry_digits = 0\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_entry_digits",
                ..
            }
        ));

        let file = write_config("history_limit = 5000\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "history_limit",
                ..
            }
        ));
    }
}
