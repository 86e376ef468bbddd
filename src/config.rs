//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CARDIOCARE_API_URL` | `http://127.0.0.1:8000` | Scoring service base URL |
//! | `CARDIOCARE_MIN_LOADING_MS` | `600` | Minimum visible loading time, `0` disables |
//! | `CARDIOCARE_LOG_MODE` | `auto` | `file`, `stdout` or `auto` |
//! | `CARDIOCARE_LOG_FILE` | `cardiocare.log` | Log file when logging to file |

use std::path::PathBuf;
use std::time::Duration;

use crate::CardiocareError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_MIN_LOADING_MS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "cardiocare.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    File,
    Stdout,
    /// File when stdout is a terminal (the TUI owns it), stdout otherwise.
    Auto,
}

impl LogMode {
    /// Resolve `Auto` against whether stdout is interactive.
    #[must_use]
    pub fn use_file(&self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the scoring service, without trailing slash.
    pub api_url: String,
    /// Floor on how long `Submitting` stays visible before a success shows.
    pub min_loading: Duration,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            min_loading: Duration::from_millis(DEFAULT_MIN_LOADING_MS),
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    /// Returns `CardiocareError::Config` for malformed values.
    pub fn from_env() -> Result<Self, CardiocareError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (used by tests).
    ///
    /// # Errors
    /// Returns `CardiocareError::Config` for malformed values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CardiocareError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CARDIOCARE_API_URL").filter(|v| !v.trim().is_empty()) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CardiocareError::Config(format!(
                    "CARDIOCARE_API_URL must start with http:// or https://, got {:?}",
                    url
                )));
            }
            config.api_url = url;
        }

        if let Some(ms) = lookup("CARDIOCARE_MIN_LOADING_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                CardiocareError::Config(format!(
                    "CARDIOCARE_MIN_LOADING_MS must be a whole number of milliseconds, got {:?}",
                    ms
                ))
            })?;
            config.min_loading = Duration::from_millis(ms);
        }

        if let Some(mode) = lookup("CARDIOCARE_LOG_MODE") {
            config.log_mode = match mode.trim().to_ascii_lowercase().as_str() {
                "file" => LogMode::File,
                "stdout" => LogMode::Stdout,
                "auto" | "" => LogMode::Auto,
                other => {
                    return Err(CardiocareError::Config(format!(
                        "CARDIOCARE_LOG_MODE must be file, stdout or auto, got {:?}",
                        other
                    )))
                }
            };
        }

        if let Some(path) = lookup("CARDIOCARE_LOG_FILE").filter(|v| !v.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("Should load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert_eq!(config.min_loading, Duration::from_millis(600));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CARDIOCARE_API_URL", "https://risk.example.org/"),
            ("CARDIOCARE_MIN_LOADING_MS", "0"),
            ("CARDIOCARE_LOG_MODE", "STDOUT"),
            ("CARDIOCARE_LOG_FILE", "/tmp/cc.log"),
        ]))
        .expect("Should load");

        assert_eq!(config.api_url, "https://risk.example.org");
        assert_eq!(config.min_loading, Duration::ZERO);
        assert_eq!(config.log_mode, LogMode::Stdout);
        assert_eq!(config.log_file, PathBuf::from("/tmp/cc.log"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("CARDIOCARE_API_URL", "localhost:8000")])),
            Err(CardiocareError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("CARDIOCARE_MIN_LOADING_MS", "fast")])),
            Err(CardiocareError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("CARDIOCARE_LOG_MODE", "syslog")])),
            Err(CardiocareError::Config(_))
        ));
    }

    #[test]
    fn test_log_mode_resolution() {
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
    }
}
