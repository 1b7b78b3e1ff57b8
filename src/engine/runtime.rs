// Effect runtime - performs the I/O the state machine asks for
//
// Settlements are sent back as messages on an unbounded channel and fed
// through `update` by whoever owns the receiver.

use std::sync::Arc;
use tokio::sync::mpsc;

use super::debounce::DeferredTask;
use super::events::{Effect, Msg};
use crate::services::{AnalysisService, SymbolLookup};

pub struct Runtime {
    lookup: Arc<dyn SymbolLookup>,
    analysis: Arc<dyn AnalysisService>,
    /// Debounce timer and in-flight lookup share one slot
    pending_lookup: DeferredTask,
    tx: mpsc::UnboundedSender<Msg>,
}

impl Runtime {
    pub fn new(
        lookup: Arc<dyn SymbolLookup>,
        analysis: Arc<dyn AnalysisService>,
        tx: mpsc::UnboundedSender<Msg>,
    ) -> Self {
        Self {
            lookup,
            analysis,
            pending_lookup: DeferredTask::new(),
            tx,
        }
    }

    pub fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::CancelLookup => {
                if self.pending_lookup.cancel() {
                    tracing::debug!("Cancelled pending lookup");
                }
            }
            Effect::ScheduleLookup { ticket, delay } => {
                let lookup = Arc::clone(&self.lookup);
                let tx = self.tx.clone();
                self.pending_lookup.replace(async move {
                    tokio::time::sleep(delay).await;
                    tracing::debug!(query = %ticket.query, "Quiet period elapsed, looking up");
                    let outcome = lookup.search(&ticket.query).await;
                    let _ = tx.send(Msg::LookupSettled { ticket, outcome });
                });
            }
            Effect::FetchAnalysis(ticket) => {
                let analysis = Arc::clone(&self.analysis);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = analysis.analyze(&ticket.ticker).await;
                    let _ = tx.send(Msg::AnalysisSettled { ticket, outcome });
                });
            }
        }
    }

    pub fn lookup_pending(&self) -> bool {
        self.pending_lookup.is_pending()
    }
}
