//! Search interaction logic.

mod state;

pub use state::{SearchPhase, SearchState};
