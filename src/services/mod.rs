// External services consumed by the screener
//
// Both collaborators sit behind traits so the state machine can be driven
// by fakes in tests and by HTTP clients in the binary.

mod analysis;
mod lookup;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use analysis::HttpAnalysisService;
pub use lookup::FinnhubLookup;

use crate::config::constants::ANALYSIS_FAILED_MESSAGE;

/// One record returned by the symbol search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "displaySymbol", default)]
    pub display_symbol: String,
    #[serde(default)]
    pub symbol: String,
    /// Security category, e.g. "Common Stock" or "ETP"
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Body returned by the analysis backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// Error reported in-band, or produced locally when the fetch fails
    Failure { error: String },
    /// Screening report for one ticker
    Report {
        #[serde(default)]
        ticker: String,
        #[serde(default)]
        graham_results: Value,
        /// Served from the backend's cache
        #[serde(default)]
        cached: bool,
    },
}

impl AnalysisResult {
    /// Result stored when the request itself could not complete
    pub fn fetch_failed() -> Self {
        AnalysisResult::Failure {
            error: ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResult::Failure { error } => Some(error),
            AnalysisResult::Report { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("symbol lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("symbol lookup returned HTTP {0}")]
    Status(u16),
    #[error("malformed symbol lookup response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed analysis response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Free-text symbol search
#[async_trait]
pub trait SymbolLookup: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SymbolRecord>, LookupError>;
}

/// Ticker analysis backend
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, ticker: &str) -> Result<AnalysisResult, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_parses_as_failure() {
        let result: AnalysisResult = serde_json::from_value(json!({"error": "Unknown ticker"})).unwrap();
        assert_eq!(result.error(), Some("Unknown ticker"));
    }

    #[test]
    fn test_report_defaults_cached_to_false() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "ticker": "AAPL",
            "graham_results": {"adequate_size": [1.0, true]}
        }))
        .unwrap();
        match result {
            AnalysisResult::Report { ticker, cached, .. } => {
                assert_eq!(ticker, "AAPL");
                assert!(!cached);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_value::<AnalysisResult>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_symbol_record_field_names() {
        let record: SymbolRecord = serde_json::from_value(json!({
            "description": "APPLE INC",
            "displaySymbol": "AAPL",
            "symbol": "AAPL",
            "type": "Common Stock"
        }))
        .unwrap();
        assert_eq!(record.kind, "Common Stock");
        assert_eq!(record.display_symbol, "AAPL");
    }

    #[test]
    fn test_fetch_failed_message() {
        assert_eq!(AnalysisResult::fetch_failed().error(), Some("Failed to fetch analysis."));
    }
}
