// Screener - terminal stock screener
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use screener::cli::{tui, Cli, Command};
use screener::config::{load_config, Config};
use screener::engine::{common_stock_suggestions, Controller};
use screener::logging::{init_subscriber, LogTarget, Verbosity};
use screener::render::{render, to_plain};
use screener::services::{
    AnalysisResult, AnalysisService, FinnhubLookup, HttpAnalysisService, SymbolLookup,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration, then fold in command-line overrides
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config)?;

    // Interactive mode owns the terminal, so it logs to a file
    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    let target = match cli.command {
        None => LogTarget::File(&config.log_path),
        Some(_) => LogTarget::Stderr,
    };
    init_subscriber(verbosity, target)?;

    tracing::debug!(
        lookup = %config.lookup.base_url,
        analysis = %config.analysis.base_url,
        theme = config.active_theme.name(),
        "Configuration loaded"
    );

    match cli.command {
        None => {
            run_interactive(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Analyze { ticker }) => analyze(&config, &ticker).await,
        Some(Command::Lookup { query }) => lookup(&config, &query).await,
    }
}

fn build_lookup(config: &Config) -> Result<FinnhubLookup> {
    if config.lookup.token.is_none() {
        tracing::warn!("No lookup token configured; symbol search will likely be rejected");
    }
    FinnhubLookup::new(
        config.lookup.base_url.clone(),
        config.lookup.token.clone(),
        config.timeout(),
    )
}

fn build_analysis(config: &Config) -> Result<HttpAnalysisService> {
    HttpAnalysisService::new(config.analysis.base_url.clone(), config.timeout())
}

async fn run_interactive(config: Config) -> Result<()> {
    let lookup: Arc<dyn SymbolLookup> = Arc::new(build_lookup(&config)?);
    let analysis: Arc<dyn AnalysisService> = Arc::new(build_analysis(&config)?);
    let controller = Controller::new(config.engine_settings(), lookup, analysis);

    tui::run(controller, config.colors.clone())
        .await
        .context("Interactive session failed")
}

async fn analyze(config: &Config, ticker: &str) -> Result<ExitCode> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        anyhow::bail!("Ticker must not be empty");
    }

    let service = build_analysis(config)?;
    let result = match service.analyze(ticker).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Analysis request failed: {}", e);
            AnalysisResult::fetch_failed()
        }
    };

    match result {
        AnalysisResult::Failure { error } => {
            eprintln!("{}", error);
            Ok(ExitCode::FAILURE)
        }
        AnalysisResult::Report {
            ticker,
            graham_results,
            cached,
        } => {
            println!("Ticker: {}", ticker);
            let body = to_plain(&render(&graham_results));
            if !body.is_empty() {
                println!("{}", body);
            }
            if cached {
                println!("* Results served from cache");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn lookup(config: &Config, query: &str) -> Result<ExitCode> {
    let service = build_lookup(config)?;
    let records = service
        .search(query.trim())
        .await
        .with_context(|| format!("Symbol lookup for '{}' failed", query))?;

    let suggestions = common_stock_suggestions(records, config.max_suggestions);
    if suggestions.is_empty() {
        eprintln!("No common stocks match '{}'", query);
        return Ok(ExitCode::FAILURE);
    }
    for suggestion in suggestions {
        if suggestion.description.is_empty() {
            println!("{}", suggestion.symbol);
        } else {
            println!("{} — {}", suggestion.symbol, suggestion.description);
        }
    }
    Ok(ExitCode::SUCCESS)
}
