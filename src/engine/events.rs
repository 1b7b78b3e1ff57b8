// Messages into the state machine and effects out of it

use std::time::Duration;

use crate::services::{AnalysisError, AnalysisResult, LookupError, SymbolRecord};

/// Identifies the query a lookup was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub query: String,
}

/// Identifies one analysis submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub id: u64,
    pub ticker: String,
}

/// Navigation keys forwarded by the input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug)]
pub enum Msg {
    /// User edited the query text
    Edit(String),
    /// Navigation key pressed in the input
    Key(NavKey),
    /// Suggestion clicked
    SelectSuggestion(usize),
    /// History entry picked
    SelectHistory(usize),
    /// Analyze the given ticker, or the trimmed query when `None`
    Submit(Option<String>),
    /// Reset query, result and suggestions (history is kept)
    Clear,
    LookupSettled {
        ticket: LookupTicket,
        outcome: Result<Vec<SymbolRecord>, LookupError>,
    },
    AnalysisSettled {
        ticket: SubmissionTicket,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
}

impl Msg {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Msg::Edit(_) => "Edit",
            Msg::Key(_) => "Key",
            Msg::SelectSuggestion(_) => "SelectSuggestion",
            Msg::SelectHistory(_) => "SelectHistory",
            Msg::Submit(_) => "Submit",
            Msg::Clear => "Clear",
            Msg::LookupSettled { .. } => "LookupSettled",
            Msg::AnalysisSettled { .. } => "AnalysisSettled",
        }
    }
}

/// Side-effects requested by a transition. The engine itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop the pending (or in-flight) lookup, if any
    CancelLookup,
    /// Replace the pending lookup with one that fires after `delay`
    ScheduleLookup { ticket: LookupTicket, delay: Duration },
    /// Start an analysis request
    FetchAnalysis(SubmissionTicket),
}
