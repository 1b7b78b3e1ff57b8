// Suggestion and submission engine
//
// `update` is the pure state machine; `Runtime` performs the effects it
// returns; `Controller` glues the two together around a settlement channel.

mod controller;
mod debounce;
mod events;
mod history;
mod runtime;
mod state;
mod update;

pub use controller::Controller;
pub use debounce::DeferredTask;
pub use events::{Effect, LookupTicket, Msg, NavKey, SubmissionTicket};
pub use history::History;
pub use runtime::Runtime;
pub use state::{EngineSettings, SearchState, Suggestion, SuggestionState};
pub use update::{common_stock_suggestions, update};
