//! Background fetch worker.
//!
//! The worker thread owns the network client and a tokio runtime. It first
//! loads the language mapping, then serves one query at a time: the primary
//! gist listing followed by a concurrent fork lookup per gist, reassembled in
//! listing order. Commands arrive over an mpsc channel; results go back the
//! same way and are reconciled against the latest query id on the UI side.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::github::{FetchError, GistRecord, GistSource};
use crate::languages::LanguageEntry;

/// Commands accepted by the worker.
#[derive(Debug)]
pub(crate) enum FetchCommand {
    Query { id: u64, username: String },
    Shutdown,
}

/// Results emitted by the worker.
#[derive(Debug)]
pub(crate) enum FetchResult {
    /// Outcome of the one-time mapping load, always emitted first.
    Mapping(Result<Vec<LanguageEntry>, FetchError>),
    /// Outcome of one query cycle.
    Search {
        id: u64,
        outcome: Result<Vec<GistRecord>, FetchError>,
    },
}

/// Launch the worker thread and return its communication channels.
pub(crate) fn spawn<S: GistSource>(
    source: S,
    mapping_url: String,
) -> (
    Sender<FetchCommand>,
    Receiver<FetchResult>,
    Arc<AtomicU64>,
) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_query_id);

    thread::spawn(move || worker_loop(source, mapping_url, command_rx, result_tx, thread_latest));

    (command_tx, result_rx, latest_query_id)
}

fn worker_loop<S: GistSource>(
    source: S,
    mapping_url: String,
    command_rx: Receiver<FetchCommand>,
    result_tx: Sender<FetchResult>,
    latest_query_id: Arc<AtomicU64>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start the fetch runtime");
            let _ = result_tx.send(FetchResult::Mapping(Err(FetchError::Network(
                err.to_string(),
            ))));
            return;
        }
    };
    let source = Arc::new(source);

    let mapping = runtime.block_on(source.language_entries(&mapping_url));
    if let Err(err) = &mapping {
        tracing::warn!(%err, "language mapping load failed");
    }
    if result_tx.send(FetchResult::Mapping(mapping)).is_err() {
        return;
    }

    while let Ok(command) = command_rx.recv() {
        match command {
            FetchCommand::Query { id, username } => {
                // Superseded before it even started; skip the network entirely.
                if id < latest_query_id.load(AtomicOrdering::Acquire) {
                    tracing::debug!(id, "skipping superseded query");
                    continue;
                }
                let outcome = runtime.block_on(enrich(&source, &username));
                if let Err(err) = &outcome {
                    tracing::warn!(id, username, %err, "query cycle failed");
                }
                if result_tx.send(FetchResult::Search { id, outcome }).is_err() {
                    break;
                }
            }
            FetchCommand::Shutdown => break,
        }
    }
}

/// One full query cycle: primary listing plus all fork lookups.
///
/// Fork lookups run concurrently with no defined completion order, but
/// records come back in the original listing order. Any single failure fails
/// the whole cycle; no partial results escape.
async fn enrich<S: GistSource>(
    source: &Arc<S>,
    username: &str,
) -> Result<Vec<GistRecord>, FetchError> {
    let gists = source.user_gists(username).await?;
    tracing::debug!(username, count = gists.len(), "fetched gist listing");

    let mut fork_tasks = Vec::with_capacity(gists.len());
    for gist in &gists {
        let source = Arc::clone(source);
        let forks_url = gist.forks_url.clone();
        fork_tasks.push(tokio::spawn(
            async move { source.gist_forks(&forks_url).await },
        ));
    }

    let mut records = Vec::with_capacity(gists.len());
    for (gist, task) in gists.into_iter().zip(fork_tasks) {
        let forks = task
            .await
            .map_err(|err| FetchError::Network(err.to_string()))??;
        records.push(GistRecord { gist, forks });
    }
    Ok(records)
}
