// Configuration module
// Public interface for configuration loading

mod colors;
pub mod constants;
mod loader;
mod settings;

pub use colors::{BadgeColors, ColorScheme, ColorSpec, ColorTheme, SuggestionColors, UiColors};
pub use loader::{apply_env_overrides, default_config_path, load_config, parse_config};
pub use settings::{AnalysisConfig, Config, LookupConfig};
