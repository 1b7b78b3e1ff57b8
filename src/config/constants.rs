// Project-wide constants
//
// Centralised here so endpoints and tuning values have one source of
// truth. Import via `use crate::config::constants::*;`.

/// Default symbol lookup endpoint (Finnhub-compatible `/search`).
pub const DEFAULT_LOOKUP_URL: &str = "https://finnhub.io/api/v1";

/// Default analysis backend (`/analyze?ticker=`).
pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:8000";

/// Quiet period before a suggestion lookup fires.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 400;

/// Minimum trimmed query length that triggers a lookup.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Suggestions shown in the dropdown.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Entries kept in the recent-ticker history.
pub const DEFAULT_HISTORY_CAP: usize = 10;

/// HTTP request timeout for both services.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Only records of this category become suggestions.
pub const COMMON_STOCK: &str = "Common Stock";

/// Result stored when the analysis request itself fails.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to fetch analysis.";

/// Environment variable carrying the lookup API token.
pub const LOOKUP_TOKEN_ENV: &str = "SCREENER_LOOKUP_TOKEN";

/// Environment variable overriding the analysis backend URL.
pub const ANALYSIS_URL_ENV: &str = "SCREENER_ANALYSIS_URL";

/// Directory under $HOME holding config.toml and logs/.
pub const APP_DIR: &str = ".screener";
