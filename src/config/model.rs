//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the dashboard works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The signed-in user the session is started with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_user_name")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            email: None,
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Simulated latency applied to every fetch.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Directory holding `trips.toml`, `bookings.toml` and `suggestions.toml`.
    /// When unset the embedded fixtures are served.
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

impl DataConfig {
    /// The fixtures directory with a leading `~/` expanded.
    pub fn fixtures_path(&self) -> Option<PathBuf> {
        self.fixtures_dir
            .as_deref()
            .map(|dir| super::expand_home(&dir.to_string_lossy()))
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            fixtures_dir: None,
        }
    }
}

/// UI appearance and refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_user_name() -> String {
    "Traveler".to_string()
}
fn default_latency_ms() -> u64 {
    1000
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/travelhub/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.session.name, "Traveler");
        assert_eq!(cfg.data.latency_ms, 1000);
        assert!(cfg.data.fixtures_dir.is_none());
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert_eq!(cfg.ui.currency_symbol, "$");
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [session]
            name = "Priya"

            [data]
            latency_ms = 250
            fixtures_dir = "/tmp/fixtures"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.session.name, "Priya");
        assert_eq!(cfg.session.email, None);
        assert_eq!(cfg.data.latency_ms, 250);
        assert_eq!(cfg.data.fixtures_dir, Some(PathBuf::from("/tmp/fixtures")));
        assert_eq!(cfg.ui.currency_symbol, "$");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_fixtures_path_expands_home() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [data]
            fixtures_dir = "~/fixtures"
            "#,
        )
        .unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(cfg.data.fixtures_path(), Some(home.join("fixtures")));
        }
        assert_eq!(DataConfig::default().fixtures_path(), None);
    }
}
