use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default minutes between scheduled checks
pub const DEFAULT_CHECK_INTERVAL_MINUTES: f64 = 60.0;

/// Default base URL of the add-on catalog API
pub const DEFAULT_CATALOG_URL: &str = "https://catalog.addon-watch.dev/addons";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub check: CheckConfig,
    pub notify: NotifyConfig,
    /// Locale for report text; None means the built-in English messages
    pub locale: Option<String>,
}

/// Check-run configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    pub auto_check_interval_minutes: f64,
    pub catalog_url: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            auto_check_interval_minutes: DEFAULT_CHECK_INTERVAL_MINUTES,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
        }
    }
}

/// Notification channel configuration. A channel is used only when its
/// flag is set and its URL is non-empty.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NotifyConfig {
    pub use_push: bool,
    pub push_url: String,
    pub use_email: bool,
    pub email_url: String,
    pub use_webhook: bool,
    pub webhook_url: String,
}

impl Config {
    /// Load configuration from a JSON file. A missing or unreadable file is
    /// a warning, not an error: the check must still run, so every missing
    /// value falls back to its default.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read config {:?} ({}); using defaults", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not parse config {:?} ({}); using defaults", path, e);
                Self::default()
            }
        }
    }
}

/// Returns the path to the data directory for addon-watch.
/// Uses $XDG_DATA_HOME/addon-watch if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/addon-watch,
/// or ./addon-watch if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("addon-watch/config.json")
}

/// Returns the path to the watch-mode log file.
pub fn log_path() -> PathBuf {
    data_dir().join("addon-watch.log")
}

/// Returns the path to the optional message override file.
pub fn messages_path() -> PathBuf {
    data_dir().join("messages.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("addon-watch")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "check": {
                "autoCheckIntervalMinutes": 15.0
            }
        }))
        .unwrap();

        assert_eq!(result.check.auto_check_interval_minutes, 15.0);
        assert_eq!(result.check.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(result.notify, NotifyConfig::default());
        assert_eq!(result.locale, None);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "check": {
                "autoCheckIntervalMinutes": 30.0,
                "catalogUrl": "https://catalog.example.com/addons"
            },
            "notify": {
                "usePush": true,
                "pushUrl": "https://push.example.com",
                "useEmail": true,
                "emailUrl": "https://mail.example.com",
                "useWebhook": true,
                "webhookUrl": "https://hooks.example.com/x"
            },
            "locale": "de"
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                check: CheckConfig {
                    auto_check_interval_minutes: 30.0,
                    catalog_url: "https://catalog.example.com/addons".into(),
                },
                notify: NotifyConfig {
                    use_push: true,
                    push_url: "https://push.example.com".into(),
                    use_email: true,
                    email_url: "https://mail.example.com".into(),
                    use_webhook: true,
                    webhook_url: "https://hooks.example.com/x".into(),
                },
                locale: Some("de".into()),
            }
        );
    }

    #[test]
    fn load_falls_back_to_defaults_for_missing_file() {
        let config = Config::load(Path::new("/nonexistent/config.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_falls_back_to_defaults_for_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let config = Config::load(file.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/addon-watch"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/addon-watch"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./addon-watch"));
    }
}
