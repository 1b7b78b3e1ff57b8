// Command-line arguments

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ColorTheme, Config};

/// Command-line arguments accepted by the `screener` binary.
#[derive(Parser, Debug)]
#[command(
    name = "screener",
    version,
    about = "Graham-style stock screener with ticker autocomplete"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Configuration file (default: ~/.screener/config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "URL", help = "Override the analysis backend base URL")]
    pub analysis_url: Option<String>,

    #[arg(long, value_name = "URL", help = "Override the symbol lookup base URL")]
    pub lookup_url: Option<String>,

    #[arg(
        long,
        value_name = "THEME",
        help = "Color theme: dark, light, high-contrast or solarized"
    )]
    pub theme: Option<String>,

    #[arg(short, long, action = ArgAction::SetTrue, help = "Debug logging")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Analyze one ticker and print the result
    Analyze {
        #[arg(value_name = "TICKER")]
        ticker: String,
    },
    /// Print common-stock suggestions for a query
    Lookup {
        #[arg(value_name = "QUERY")]
        query: String,
    },
}

impl Cli {
    /// Fold command-line overrides into a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(url) = &self.analysis_url {
            config.analysis.base_url = url.clone();
        }
        if let Some(url) = &self.lookup_url {
            config.lookup.base_url = url.clone();
        }
        if let Some(name) = &self.theme {
            let Some(theme) = ColorTheme::from_name(name) else {
                let known: Vec<String> = ColorTheme::all().iter().map(|t| t.name().to_string()).collect();
                anyhow::bail!("Unknown theme '{}' (expected one of: {})", name, known.join(", "));
            };
            config.set_theme(theme);
        }
        config.validate()
    }
}
