// Controller - couples the search state with the effect runtime

use std::sync::Arc;
use tokio::sync::mpsc;

use super::events::Msg;
use super::runtime::Runtime;
use super::state::{EngineSettings, SearchState};
use super::update::update;
use crate::services::{AnalysisService, SymbolLookup};

/// Owns the state, runs effects, and receives settlements.
///
/// Headless: the TUI drives it, and so do the integration tests.
pub struct Controller {
    state: SearchState,
    runtime: Runtime,
    events: mpsc::UnboundedReceiver<Msg>,
}

impl Controller {
    pub fn new(
        settings: EngineSettings,
        lookup: Arc<dyn SymbolLookup>,
        analysis: Arc<dyn AnalysisService>,
    ) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        Self {
            state: SearchState::new(settings),
            runtime: Runtime::new(lookup, analysis, tx),
            events,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Apply a message and run the resulting effects.
    pub fn dispatch(&mut self, msg: Msg) {
        let effects = update(&mut self.state, msg);
        for effect in effects {
            tracing::trace!(?effect, "Executing effect");
            self.runtime.execute(effect);
        }
    }

    /// Wait for the next settlement from a background task.
    ///
    /// The runtime keeps a sender alive, so this only returns `None` if the
    /// controller is being torn down.
    pub async fn next_event(&mut self) -> Option<Msg> {
        self.events.recv().await
    }

    /// Wait for one settlement and apply it.
    pub async fn settle_next(&mut self) -> bool {
        match self.events.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Apply every settlement that has already arrived.
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.events.try_recv() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    pub fn lookup_pending(&self) -> bool {
        self.runtime.lookup_pending()
    }
}
