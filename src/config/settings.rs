// Configuration structs

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::colors::{ColorScheme, ColorTheme};
use super::constants::*;
use crate::engine::EngineSettings;

/// Symbol lookup service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL; `/search` is appended
    #[serde(default = "default_lookup_url")]
    pub base_url: String,

    /// API token sent as the `token` query parameter
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_lookup_url(),
            token: None,
        }
    }
}

/// Analysis backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Base URL; `/analyze` is appended
    #[serde(default = "default_analysis_url")]
    pub base_url: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: default_analysis_url(),
        }
    }
}

fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}

fn default_analysis_url() -> String {
    DEFAULT_ANALYSIS_URL.to_string()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub lookup: LookupConfig,
    pub analysis: AnalysisConfig,

    /// HTTP request timeout for both services
    pub timeout_seconds: u64,

    /// Debounce window for suggestion lookups
    pub quiet_period_ms: u64,

    /// Minimum trimmed query length before lookups fire
    pub min_query_chars: usize,

    /// Suggestions kept from each lookup
    pub max_suggestions: usize,

    /// Recent tickers kept in history
    pub history_cap: usize,

    /// Active color theme
    pub active_theme: ColorTheme,

    /// TUI color scheme (theme colors unless overridden in the file)
    pub colors: ColorScheme,

    /// Log file for interactive mode
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let log_path = dirs::home_dir()
            .map(|home| home.join(APP_DIR).join("logs").join("screener.log"))
            .unwrap_or_else(|| PathBuf::from("screener.log"));

        Self {
            lookup: LookupConfig::default(),
            analysis: AnalysisConfig::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            history_cap: DEFAULT_HISTORY_CAP,
            active_theme: ColorTheme::default(),
            colors: ColorScheme::default(),
            log_path,
        }
    }
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.lookup.base_url.trim().is_empty() {
            bail!("lookup.base_url must not be empty");
        }

        if self.analysis.base_url.trim().is_empty() {
            bail!(
                "analysis.base_url must not be empty\n\n\
                 Set it in ~/{}/config.toml or export {}",
                APP_DIR,
                ANALYSIS_URL_ENV
            );
        }

        if self.timeout_seconds == 0 {
            bail!("timeout_seconds must be greater than 0");
        }

        if self.max_suggestions == 0 {
            bail!("max_suggestions must be greater than 0");
        }

        if self.history_cap == 0 {
            bail!("history_cap must be greater than 0");
        }

        if self.min_query_chars == 0 {
            bail!("min_query_chars must be greater than 0");
        }

        Ok(())
    }

    /// Apply a theme, replacing the current colors
    pub fn set_theme(&mut self, theme: ColorTheme) {
        self.active_theme = theme;
        self.colors = theme.to_scheme();
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Tuning values for the suggestion/submission state machine
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            quiet_period: Duration::from_millis(self.quiet_period_ms),
            min_query_chars: self.min_query_chars,
            max_suggestions: self.max_suggestions,
            history_cap: self.history_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine_settings(), EngineSettings::default());
    }

    #[test]
    fn test_zero_history_cap_rejected() {
        let config = Config {
            history_cap: 0,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("history_cap"));
    }

    #[test]
    fn test_empty_analysis_url_rejected() {
        let mut config = Config::default();
        config.analysis.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_theme_replaces_colors() {
        let mut config = Config::default();
        config.set_theme(ColorTheme::Light);
        assert_eq!(config.active_theme, ColorTheme::Light);
        assert_eq!(
            config.colors.suggestions.selected_bg.to_color(),
            ratatui::style::Color::Rgb(189, 228, 255)
        );
    }
}
