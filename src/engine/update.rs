//! Pure update function for the search widget.
//!
//! `update()` takes the current state and a message, mutates the state, and
//! returns the effects the runtime should execute. Nothing here performs I/O,
//! so every transition can be exercised directly in tests.

use super::events::{Effect, LookupTicket, Msg, NavKey, SubmissionTicket};
use super::state::{SearchState, Suggestion};
use crate::config::constants::COMMON_STOCK;
use crate::services::{AnalysisError, AnalysisResult, LookupError, SymbolRecord};

/// Apply a message to the state and return the effects to run.
pub fn update(state: &mut SearchState, msg: Msg) -> Vec<Effect> {
    tracing::trace!(msg = msg.name(), "update");
    match msg {
        Msg::Edit(text) => on_edit(state, text),
        Msg::Key(key) => on_key(state, key),
        Msg::SelectSuggestion(index) => {
            let Some(symbol) = state.suggestions.list().get(index).map(|s| s.symbol.clone()) else {
                return Vec::new();
            };
            commit(state, symbol)
        }
        Msg::SelectHistory(index) => {
            let Some(ticker) = state.history.get(index).map(str::to_string) else {
                return Vec::new();
            };
            let mut effects = set_query(state, ticker.clone());
            effects.extend(submit(state, Some(ticker)));
            effects
        }
        Msg::Submit(explicit) => submit(state, explicit),
        Msg::Clear => clear(state),
        Msg::LookupSettled { ticket, outcome } => on_lookup_settled(state, ticket, outcome),
        Msg::AnalysisSettled { ticket, outcome } => on_analysis_settled(state, ticket, outcome),
    }
}

fn on_edit(state: &mut SearchState, text: String) -> Vec<Effect> {
    if text == state.query {
        return Vec::new();
    }
    state.query = text;
    state.lookup_generation += 1;
    state.suggestions.reveal();

    let trimmed = state.query.trim();
    if trimmed.chars().count() < state.settings.min_query_chars {
        state.suggestions.clear();
        return vec![Effect::CancelLookup];
    }

    vec![Effect::ScheduleLookup {
        ticket: LookupTicket {
            generation: state.lookup_generation,
            query: trimmed.to_string(),
        },
        delay: state.settings.quiet_period,
    }]
}

/// Programmatic query change: invalidates lookups without scheduling one.
fn set_query(state: &mut SearchState, text: String) -> Vec<Effect> {
    if state.query == text {
        return Vec::new();
    }
    state.query = text;
    state.lookup_generation += 1;
    vec![Effect::CancelLookup]
}

fn on_key(state: &mut SearchState, key: NavKey) -> Vec<Effect> {
    if !state.suggestions.is_open() {
        return match key {
            NavKey::Enter => submit(state, None),
            _ => Vec::new(),
        };
    }

    match key {
        NavKey::Down => state.suggestions.select_next(),
        NavKey::Up => state.suggestions.select_previous(),
        NavKey::Escape => state.suggestions.hide(),
        NavKey::Enter => {
            if let Some(selected) = state.suggestions.highlighted_suggestion() {
                let symbol = selected.symbol.clone();
                return commit(state, symbol);
            }
            let exact = state
                .suggestions
                .find_symbol(state.query.trim())
                .map(|s| s.symbol.clone());
            return match exact {
                Some(symbol) => submit(state, Some(symbol)),
                None => {
                    tracing::debug!(query = %state.query, "Enter ignored: no highlighted or matching suggestion");
                    Vec::new()
                }
            };
        }
    }
    Vec::new()
}

/// Take a suggestion: query becomes its symbol, list hides, analysis starts.
fn commit(state: &mut SearchState, symbol: String) -> Vec<Effect> {
    let mut effects = set_query(state, symbol.clone());
    state.suggestions.hide();
    effects.extend(submit(state, Some(symbol)));
    effects
}

fn submit(state: &mut SearchState, explicit: Option<String>) -> Vec<Effect> {
    let ticker = explicit
        .unwrap_or_else(|| state.query.clone())
        .trim()
        .to_string();
    if ticker.is_empty() {
        tracing::debug!("Submit ignored: empty ticker");
        return Vec::new();
    }

    state.loading = true;
    state.result = None;
    state.suggestions.hide();
    // A lookup landing mid-analysis must not reopen the dropdown.
    state.lookup_generation += 1;
    state.submission_seq += 1;

    tracing::debug!(ticker = %ticker, id = state.submission_seq, "Submitting analysis");
    vec![
        Effect::CancelLookup,
        Effect::FetchAnalysis(SubmissionTicket {
            id: state.submission_seq,
            ticker,
        }),
    ]
}

fn clear(state: &mut SearchState) -> Vec<Effect> {
    state.query.clear();
    state.lookup_generation += 1;
    state.result = None;
    state.suggestions.clear();
    vec![Effect::CancelLookup]
}

/// Keep common stocks only, in response order, at most `max` of them.
pub fn common_stock_suggestions(records: Vec<SymbolRecord>, max: usize) -> Vec<Suggestion> {
    records
        .into_iter()
        .filter(|r| r.kind == COMMON_STOCK)
        .take(max)
        .map(|r| Suggestion {
            symbol: r.symbol,
            description: r.description,
        })
        .collect()
}

fn on_lookup_settled(
    state: &mut SearchState,
    ticket: LookupTicket,
    outcome: Result<Vec<SymbolRecord>, LookupError>,
) -> Vec<Effect> {
    if ticket.generation != state.lookup_generation {
        tracing::debug!(
            query = %ticket.query,
            generation = ticket.generation,
            current = state.lookup_generation,
            "Discarding stale lookup"
        );
        return Vec::new();
    }

    match outcome {
        Ok(records) => {
            let list = common_stock_suggestions(records, state.settings.max_suggestions);
            tracing::debug!(query = %ticket.query, count = list.len(), "Suggestions updated");
            state.suggestions.replace(list);
        }
        Err(err) => {
            tracing::warn!(query = %ticket.query, "Symbol lookup failed: {}", err);
            state.suggestions.clear();
        }
    }
    Vec::new()
}

fn on_analysis_settled(
    state: &mut SearchState,
    ticket: SubmissionTicket,
    outcome: Result<AnalysisResult, AnalysisError>,
) -> Vec<Effect> {
    if ticket.id != state.submission_seq {
        tracing::debug!(ticker = %ticket.ticker, id = ticket.id, "Discarding superseded analysis");
        return Vec::new();
    }

    state.loading = false;
    match outcome {
        Ok(result) => {
            state.result = Some(result);
            state.history.push(&ticket.ticker);
            set_query(state, ticket.ticker)
        }
        Err(err) => {
            tracing::warn!(ticker = %ticket.ticker, "Analysis failed: {}", err);
            state.result = Some(AnalysisResult::fetch_failed());
            Vec::new()
        }
    }
}

// ──────────────────── tests ────────────────────
