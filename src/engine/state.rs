// Search state - the single record every transition operates on

use std::time::Duration;

use super::history::History;
use crate::config::constants::*;
use crate::services::AnalysisResult;

/// A ticker offered in the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub symbol: String,
    pub description: String,
}

/// Dropdown list, visibility and keyboard highlight.
///
/// The highlight is only meaningful while the list is open; replacing or
/// clearing the list always drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    list: Vec<Suggestion>,
    visible: bool,
    highlighted: Option<usize>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Suggestion] {
        &self.list
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visible and non-empty: navigation keys act on the list
    pub fn is_open(&self) -> bool {
        self.visible && !self.list.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        if self.is_open() {
            self.highlighted
        } else {
            None
        }
    }

    pub fn highlighted_suggestion(&self) -> Option<&Suggestion> {
        self.highlighted().and_then(|i| self.list.get(i))
    }

    /// Replace the list wholesale; shown only when something matched
    pub fn replace(&mut self, list: Vec<Suggestion>) {
        self.visible = !list.is_empty();
        self.list = list;
        self.highlighted = None;
    }

    /// Drop the list, hide it and reset the highlight
    pub fn clear(&mut self) {
        self.list.clear();
        self.visible = false;
        self.highlighted = None;
    }

    /// Hide without discarding the list
    pub fn hide(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    /// Show again after an edit (list contents unchanged)
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// Move highlight down, wrapping from last to first
    pub fn select_next(&mut self) {
        if !self.list.is_empty() {
            self.highlighted = Some(match self.highlighted {
                Some(i) => (i + 1) % self.list.len(),
                None => 0,
            });
        }
    }

    /// Move highlight up, wrapping from first to last (and from none to last)
    pub fn select_previous(&mut self) {
        if !self.list.is_empty() {
            self.highlighted = Some(match self.highlighted {
                Some(i) if i > 0 => i - 1,
                _ => self.list.len() - 1,
            });
        }
    }

    /// Case-insensitive exact symbol match
    pub fn find_symbol(&self, symbol: &str) -> Option<&Suggestion> {
        self.list
            .iter()
            .find(|s| s.symbol.to_uppercase() == symbol.to_uppercase())
    }
}

/// Tuning knobs for the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub quiet_period: Duration,
    pub min_query_chars: usize,
    pub max_suggestions: usize,
    pub history_cap: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(DEFAULT_QUIET_PERIOD_MS),
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }
}

/// Everything the widget knows. Mutated only through `update`.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub(super) settings: EngineSettings,
    pub(super) query: String,
    pub(super) suggestions: SuggestionState,
    pub(super) loading: bool,
    pub(super) result: Option<AnalysisResult>,
    pub(super) history: History,
    /// Bumped on every query change; lookups for older generations are stale
    pub(super) lookup_generation: u64,
    /// Id of the latest submission; older settlements are ignored
    pub(super) submission_seq: u64,
}

impl SearchState {
    pub fn new(settings: EngineSettings) -> Self {
        let history = History::new(settings.history_cap);
        Self {
            settings,
            query: String::new(),
            suggestions: SuggestionState::new(),
            loading: false,
            result: None,
            history,
            lookup_generation: 0,
            submission_seq: 0,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn lookup_generation(&self) -> u64 {
        self.lookup_generation
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
