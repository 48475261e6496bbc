// Configuration handling. The CLI reads its API key from a TOML file under
// the user's config directory; the file is seeded with a placeholder on
// first run and never written again by the program (the user edits it by
// hand to set a real key).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Base URL of the redirect service, used unless the config file sets `url`.
pub const DEFAULT_URL: &str = "http://173.255.248.182:8000";

/// Key the config file is seeded with on first run.
pub const PLACEHOLDER_KEY: &str = "<insert-key>";

const CONFIG_DIR: &str = "link-cli";
const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loaded configuration. `key` is the only field the seeded file contains;
/// `url` may be added by hand to point the client at another server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub key: String,
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

/// Directory holding the config file, e.g. `~/.config/link-cli` on Linux.
pub fn config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR)
}

/// Full path of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Create the config directory and seed the file with a placeholder key if
/// absent. Existing files are left untouched. Returns the file path.
pub fn ensure_config() -> Result<PathBuf, ConfigError> {
    ensure_config_at(&config_path())
}

/// Load the configuration from its fixed path.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

fn ensure_config_at(path: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    if !path.exists() {
        debug!(path = %path.display(), "seeding config file with placeholder key");
        fs::write(path, format!("key = \"{PLACEHOLDER_KEY}\"\n"))?;
    }
    Ok(path.to_path_buf())
}

fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn seeds_placeholder_on_first_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("link-cli").join("config.toml");

        ensure_config_at(&path).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.key, PLACEHOLDER_KEY);
        assert_eq!(config.url, DEFAULT_URL);
    }

    #[test]
    fn ensure_is_idempotent_and_preserves_edits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        ensure_config_at(&path).unwrap();
        fs::write(&path, "key = \"real-key\"\n").unwrap();
        ensure_config_at(&path).unwrap();

        assert_eq!(load_config_from(&path).unwrap().key, "real-key");
    }

    #[test]
    fn loads_exact_key_and_url_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "key = \"abc123\"\nurl = \"http://localhost:9999\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.key, "abc123");
        assert_eq!(config.url, "http://localhost:9999");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "key = [broken\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn file_without_key_is_parse_error() {
        // `key` has no default; a file carrying only `url` must not load.
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "url = \"http://localhost:9999\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
