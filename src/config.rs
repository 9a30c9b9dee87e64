use crate::tmdb::{DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_OVERVIEW_PREVIEW_LEN: usize = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No TMDB API key configured")]
    MissingApiKey,
}

impl ConfigError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::Io { path, source } => {
                format!("Could not read config file {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => format!("Config file is not valid TOML: {}", e),
            ConfigError::MissingApiKey => {
                "No TMDB API key found. Pass --api-key, set TMDB_API_KEY, or add api_key to the config file"
                    .to_string()
            }
        }
    }
}

/// Settings read from `config.toml` under the platform config directory.
///
/// Every key is optional:
///
/// ```toml
/// api_key = "..."
/// api_base_url = "https://api.themoviedb.org/3"
/// image_base_url = "https://image.tmdb.org/t/p/w500"
/// overview_preview_len = 100
/// ```
///
/// An API key given on the command line (or via `TMDB_API_KEY`) wins over the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub image_base_url: String,
    pub overview_preview_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            overview_preview_len: DEFAULT_OVERVIEW_PREVIEW_LEN,
        }
    }
}

impl Config {
    /// Location of the config file in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cinemasphere", "cinema-sphere")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loaded config");
                Self::from_toml_str(&contents)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace the API key when one was given on the command line.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.image_base_url, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.overview_preview_len, 100);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("api_key = \"abc\"\n").unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.overview_preview_len, DEFAULT_OVERVIEW_PREVIEW_LEN);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = Config::from_toml_str("overview_preview_len = \"long\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.user_message().contains("not valid TOML"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"from-file\"").unwrap();
        writeln!(file, "overview_preview_len = 40").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.api_key().unwrap(), "from-file");
        assert_eq!(config.overview_preview_len, 40);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_command_line_key_wins() {
        let config = Config::from_toml_str("api_key = \"from-file\"")
            .unwrap()
            .with_api_key(Some("from-cli".to_string()));
        assert_eq!(config.api_key().unwrap(), "from-cli");

        let config = config.with_api_key(Some("  ".to_string()));
        assert_eq!(config.api_key().unwrap(), "from-cli");
    }

    #[test]
    fn test_missing_api_key() {
        let config = Config::default().with_api_key(None);
        assert!(matches!(config.api_key(), Err(ConfigError::MissingApiKey)));

        let blank = Config {
            api_key: Some(" ".to_string()),
            ..Config::default()
        };
        assert!(matches!(blank.api_key(), Err(ConfigError::MissingApiKey)));
    }
}
