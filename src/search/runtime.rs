//! Query sequencing between the UI thread and the fetch worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::worker::{FetchCommand, FetchResult};

/// UI-side handle for the background fetch worker.
///
/// Every issued fetch carries a monotonically increasing id; completions that
/// do not match the latest issued id are dropped, so a slow response for a
/// superseded query can never overwrite newer state.
pub(crate) struct FetchRuntime {
    tx: Sender<FetchCommand>,
    rx: Receiver<FetchResult>,
    latest_query_id: Arc<AtomicU64>,
    next_query_id: u64,
    current_query_id: Option<u64>,
    in_flight: bool,
}

impl FetchRuntime {
    pub(crate) fn new(
        tx: Sender<FetchCommand>,
        rx: Receiver<FetchResult>,
        latest_query_id: Arc<AtomicU64>,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_query_id,
            next_query_id: 0,
            current_query_id: None,
            in_flight: false,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(FetchCommand::Shutdown);
    }

    /// Send a fetch for `username`, superseding any earlier in-flight fetch.
    pub(crate) fn issue_fetch(&mut self, username: String) {
        self.next_query_id = self.next_query_id.saturating_add(1);
        let id = self.next_query_id;
        self.current_query_id = Some(id);
        self.in_flight = true;
        self.latest_query_id.store(id, AtomicOrdering::Release);
        tracing::debug!(id, username, "issuing fetch");
        let _ = self.tx.send(FetchCommand::Query { id, username });
    }

    pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
        Some(result_id) == self.current_query_id
    }

    pub(crate) fn record_completion(&mut self) {
        self.in_flight = false;
    }

    #[cfg(test)]
    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn try_recv(&mut self) -> Result<FetchResult, TryRecvError> {
        self.rx.try_recv()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn runtime() -> (FetchRuntime, Receiver<FetchCommand>) {
        let (tx, command_rx) = mpsc::channel();
        let (_result_tx, rx) = mpsc::channel::<FetchResult>();
        let latest = Arc::new(AtomicU64::new(0));
        (FetchRuntime::new(tx, rx, latest), command_rx)
    }

    #[test]
    fn ids_increase_and_supersede() {
        let (mut fetch, command_rx) = runtime();

        fetch.issue_fetch("alice".to_string());
        fetch.issue_fetch("bob".to_string());

        let first = command_rx.try_recv().expect("first command");
        let second = command_rx.try_recv().expect("second command");
        let (FetchCommand::Query { id: id1, .. }, FetchCommand::Query { id: id2, .. }) =
            (first, second)
        else {
            panic!("expected query commands");
        };

        assert!(id2 > id1);
        assert!(!fetch.matches_latest(id1));
        assert!(fetch.matches_latest(id2));
        assert_eq!(
            fetch.latest_query_id.load(AtomicOrdering::Acquire),
            id2,
            "shared latest id tracks the newest fetch"
        );
    }

    #[test]
    fn completion_clears_in_flight() {
        let (mut fetch, _command_rx) = runtime();
        fetch.issue_fetch("alice".to_string());
        assert!(fetch.is_in_flight());
        fetch.record_completion();
        assert!(!fetch.is_in_flight());
    }
}
