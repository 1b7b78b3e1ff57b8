// Color Scheme Configuration - Customizable TUI colors
//
// Badge, dropdown and chrome colors can be overridden per element in the
// config file, or picked wholesale through a named theme.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Predefined color themes for different terminal backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    /// White text on black background (default)
    #[default]
    Dark,
    /// Black text on white background
    Light,
    /// High contrast yellow/white on black
    HighContrast,
    /// Solarized Dark palette
    Solarized,
}

impl ColorTheme {
    /// Convert theme to color scheme
    pub fn to_scheme(&self) -> ColorScheme {
        match self {
            Self::Dark => ColorScheme::default(),
            Self::Light => Self::light_scheme(),
            Self::HighContrast => Self::high_contrast_scheme(),
            Self::Solarized => Self::solarized_scheme(),
        }
    }

    /// Parse a theme name as written in config or on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            "high-contrast" | "highcontrast" => Some(Self::HighContrast),
            "solarized" => Some(Self::Solarized),
            _ => None,
        }
    }

    fn light_scheme() -> ColorScheme {
        ColorScheme {
            badges: BadgeColors {
                passed: ColorSpec::Rgb(46, 125, 50),
                failed: ColorSpec::Rgb(198, 40, 40),
                label: ColorSpec::Named("white".to_string()),
            },
            suggestions: SuggestionColors {
                border: ColorSpec::Named("darkgray".to_string()),
                symbol: ColorSpec::Rgb(0, 0, 139), // Dark blue
                description: ColorSpec::Named("black".to_string()),
                selected_bg: ColorSpec::Rgb(189, 228, 255),
                selected_fg: ColorSpec::Named("black".to_string()),
            },
            ui: UiColors {
                border: ColorSpec::Named("darkgray".to_string()),
                input: ColorSpec::Named("black".to_string()),
                cursor: ColorSpec::Rgb(0, 0, 255),
                key: ColorSpec::Rgb(0, 0, 139),
                error: ColorSpec::Named("red".to_string()),
                notice: ColorSpec::Named("gray".to_string()),
            },
        }
    }

    fn high_contrast_scheme() -> ColorScheme {
        ColorScheme {
            badges: BadgeColors {
                passed: ColorSpec::Named("green".to_string()),
                failed: ColorSpec::Named("red".to_string()),
                label: ColorSpec::Named("black".to_string()),
            },
            suggestions: SuggestionColors {
                border: ColorSpec::Named("white".to_string()),
                symbol: ColorSpec::Named("yellow".to_string()),
                description: ColorSpec::Named("white".to_string()),
                selected_bg: ColorSpec::Named("yellow".to_string()),
                selected_fg: ColorSpec::Named("black".to_string()),
            },
            ui: UiColors {
                border: ColorSpec::Named("white".to_string()),
                input: ColorSpec::Named("yellow".to_string()),
                cursor: ColorSpec::Named("yellow".to_string()),
                key: ColorSpec::Named("white".to_string()),
                error: ColorSpec::Named("lightred".to_string()),
                notice: ColorSpec::Named("white".to_string()),
            },
        }
    }

    fn solarized_scheme() -> ColorScheme {
        // Solarized Dark palette
        let base0 = ColorSpec::Rgb(131, 148, 150);
        let base01 = ColorSpec::Rgb(88, 110, 117);
        let blue = ColorSpec::Rgb(38, 139, 210);
        let cyan = ColorSpec::Rgb(42, 161, 152);
        let green = ColorSpec::Rgb(133, 153, 0);
        let red = ColorSpec::Rgb(220, 50, 47);
        let base03 = ColorSpec::Rgb(0, 43, 54);

        ColorScheme {
            badges: BadgeColors {
                passed: green,
                failed: red.clone(),
                label: base03.clone(),
            },
            suggestions: SuggestionColors {
                border: base01.clone(),
                symbol: blue.clone(),
                description: base0.clone(),
                selected_bg: cyan.clone(),
                selected_fg: base03,
            },
            ui: UiColors {
                border: base01.clone(),
                input: base0,
                cursor: cyan,
                key: blue,
                error: red,
                notice: base01,
            },
        }
    }

    /// Get all available themes
    pub fn all() -> Vec<Self> {
        vec![Self::Dark, Self::Light, Self::HighContrast, Self::Solarized]
    }

    /// Get theme name for display
    pub fn name(&self) -> &str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
            Self::Solarized => "Solarized",
        }
    }
}

/// Color scheme for TUI elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Pass/fail badge colors
    #[serde(default = "default_badge_colors")]
    pub badges: BadgeColors,

    /// Suggestion dropdown colors
    #[serde(default = "default_suggestion_colors")]
    pub suggestions: SuggestionColors,

    /// Border and UI element colors
    #[serde(default = "default_ui_colors")]
    pub ui: UiColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            badges: default_badge_colors(),
            suggestions: default_suggestion_colors(),
            ui: default_ui_colors(),
        }
    }
}

/// Pass/fail badge colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeColors {
    /// Background of a passed badge
    #[serde(default = "default_green")]
    pub passed: ColorSpec,

    /// Background of a failed badge
    #[serde(default = "default_red")]
    pub failed: ColorSpec,

    /// Badge text
    #[serde(default = "default_white")]
    pub label: ColorSpec,
}

fn default_badge_colors() -> BadgeColors {
    BadgeColors {
        passed: default_green(),
        failed: default_red(),
        label: default_white(),
    }
}

/// Suggestion dropdown colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionColors {
    /// Dropdown border
    #[serde(default = "default_gray")]
    pub border: ColorSpec,

    /// Ticker symbol
    #[serde(default = "default_cyan")]
    pub symbol: ColorSpec,

    /// Company description
    #[serde(default = "default_gray")]
    pub description: ColorSpec,

    /// Highlighted row background
    #[serde(default = "default_cyan")]
    pub selected_bg: ColorSpec,

    /// Highlighted row text
    #[serde(default = "default_black")]
    pub selected_fg: ColorSpec,
}

fn default_suggestion_colors() -> SuggestionColors {
    SuggestionColors {
        border: default_gray(),
        symbol: default_cyan(),
        description: default_gray(),
        selected_bg: default_cyan(),
        selected_fg: default_black(),
    }
}

/// UI element colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiColors {
    /// Borders
    #[serde(default = "default_gray")]
    pub border: ColorSpec,

    /// Input text
    #[serde(default = "default_white")]
    pub input: ColorSpec,

    /// Cursor and input title
    #[serde(default = "default_cyan")]
    pub cursor: ColorSpec,

    /// Mapping keys in the result tree
    #[serde(default = "default_yellow")]
    pub key: ColorSpec,

    /// Analysis error line
    #[serde(default = "default_red")]
    pub error: ColorSpec,

    /// Hints and the cache disclosure
    #[serde(default = "default_dark_gray")]
    pub notice: ColorSpec,
}

fn default_ui_colors() -> UiColors {
    UiColors {
        border: default_gray(),
        input: default_white(),
        cursor: default_cyan(),
        key: default_yellow(),
        error: default_red(),
        notice: default_dark_gray(),
    }
}

/// Color specification - supports named colors and RGB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (e.g., "red", "green", "cyan")
    Named(String),
    /// RGB color (e.g., [255, 0, 0])
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    /// Convert to ratatui Color
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Named(name) => parse_named_color(name),
            ColorSpec::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        }
    }
}

/// Parse named color string to ratatui Color
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::White, // Default fallback
    }
}

fn default_green() -> ColorSpec {
    ColorSpec::Named("green".to_string())
}

fn default_dark_gray() -> ColorSpec {
    ColorSpec::Named("darkgray".to_string())
}

fn default_cyan() -> ColorSpec {
    ColorSpec::Named("cyan".to_string())
}

fn default_yellow() -> ColorSpec {
    ColorSpec::Named("yellow".to_string())
}

fn default_gray() -> ColorSpec {
    ColorSpec::Named("gray".to_string())
}

fn default_white() -> ColorSpec {
    ColorSpec::Named("white".to_string())
}

fn default_red() -> ColorSpec {
    ColorSpec::Named("red".to_string())
}

fn default_black() -> ColorSpec {
    ColorSpec::Named("black".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_badges_are_green_and_red() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.badges.passed.to_color(), Color::Green);
        assert_eq!(scheme.badges.failed.to_color(), Color::Red);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("cyan"), Color::Cyan);
        assert_eq!(parse_named_color("DarkGray"), Color::DarkGray);
        assert_eq!(parse_named_color("unknown"), Color::White); // Fallback
    }

    #[test]
    fn test_theme_from_name() {
        assert_eq!(ColorTheme::from_name("high-contrast"), Some(ColorTheme::HighContrast));
        assert_eq!(ColorTheme::from_name("Solarized"), Some(ColorTheme::Solarized));
        assert_eq!(ColorTheme::from_name("neon"), None);
    }

    #[test]
    fn test_partial_scheme_from_toml() {
        let scheme: ColorScheme = toml::from_str(
            r#"
            [badges]
            passed = [0, 200, 0]
            "#,
        )
        .unwrap();
        assert_eq!(scheme.badges.passed.to_color(), Color::Rgb(0, 200, 0));
        assert_eq!(scheme.badges.failed.to_color(), Color::Red);
        assert_eq!(scheme.ui.key.to_color(), Color::Yellow);
    }

    #[test]
    fn test_every_theme_builds() {
        for theme in ColorTheme::all() {
            let scheme = theme.to_scheme();
            let _ = scheme.suggestions.selected_bg.to_color();
            assert!(!theme.name().is_empty());
        }
    }
}
