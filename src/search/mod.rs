//! The debounced search pipeline: state machine, debounce timer, query
//! sequencing, and the background fetch worker.

mod debounce;
mod runtime;
mod state;
mod worker;

pub use debounce::Debounce;
pub use state::{Phase, SearchEvent, SearchState};

pub(crate) use runtime::FetchRuntime;
pub(crate) use worker::{FetchCommand, FetchResult, spawn};
