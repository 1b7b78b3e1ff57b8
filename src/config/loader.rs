// Configuration loader
// Loads settings from ~/.screener/config.toml, then applies environment overrides

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::colors::{ColorScheme, ColorTheme};
use super::constants::*;
use super::settings::{AnalysisConfig, Config, LookupConfig};

/// On-disk shape of config.toml. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    lookup: Option<LookupConfig>,
    #[serde(default)]
    analysis: Option<AnalysisConfig>,
    timeout_seconds: Option<u64>,
    quiet_period_ms: Option<u64>,
    min_query_chars: Option<usize>,
    max_suggestions: Option<usize>,
    history_cap: Option<usize>,
    active_theme: Option<String>,
    /// Partial palette, layered over the active theme
    colors: Option<toml::Table>,
    log_path: Option<PathBuf>,
}

/// Default config location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR).join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, a missing
/// ~/.screener/config.toml simply yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let contents = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?,
        ),
        None => match default_config_path() {
            Some(path) if path.exists() => Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?,
            ),
            _ => None,
        },
    };

    let mut config = match contents {
        Some(contents) => parse_config(&contents)?,
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

/// Parse config.toml contents on top of the defaults.
pub fn parse_config(contents: &str) -> Result<Config> {
    let toml_config: TomlConfig =
        toml::from_str(contents).context("Failed to parse config.toml")?;

    let mut config = Config::default();

    if let Some(lookup) = toml_config.lookup {
        config.lookup = lookup;
    }
    if let Some(analysis) = toml_config.analysis {
        config.analysis = analysis;
    }
    if let Some(timeout) = toml_config.timeout_seconds {
        config.timeout_seconds = timeout;
    }
    if let Some(quiet) = toml_config.quiet_period_ms {
        config.quiet_period_ms = quiet;
    }
    if let Some(min) = toml_config.min_query_chars {
        config.min_query_chars = min;
    }
    if let Some(max) = toml_config.max_suggestions {
        config.max_suggestions = max;
    }
    if let Some(cap) = toml_config.history_cap {
        config.history_cap = cap;
    }
    if let Some(name) = toml_config.active_theme {
        let Some(theme) = ColorTheme::from_name(&name) else {
            bail!(
                "Unknown theme '{}'. Valid themes: dark, light, high-contrast, solarized",
                name
            );
        };
        config.set_theme(theme);
    }
    // Explicit colors win over the theme palette, field by field.
    if let Some(overrides) = toml_config.colors {
        config.colors = overlay_colors(&config.colors, overrides)?;
    }
    if let Some(log_path) = toml_config.log_path {
        config.log_path = log_path;
    }

    Ok(config)
}

/// Apply a partial `[colors]` table on top of `base`.
fn overlay_colors(base: &ColorScheme, overrides: toml::Table) -> Result<ColorScheme> {
    let toml::Value::Table(mut merged) =
        toml::Value::try_from(base).context("Failed to serialize color scheme")?
    else {
        bail!("Color scheme did not serialize to a table");
    };
    merge_tables(&mut merged, overrides);
    toml::Value::Table(merged)
        .try_into()
        .context("Invalid [colors] table in config.toml")
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(table) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, table),
                _ => {
                    base.insert(key, toml::Value::Table(table));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

/// Environment variables take precedence over the file.
pub fn apply_env_overrides<F>(config: &mut Config, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = var(LOOKUP_TOKEN_ENV).filter(|t| !t.is_empty()) {
        config.lookup.token = Some(token);
    }
    if let Some(url) = var(ANALYSIS_URL_ENV).filter(|u| !u.is_empty()) {
        config.analysis.base_url = url;
    }
}
