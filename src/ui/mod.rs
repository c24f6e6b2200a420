//! Interactive terminal UI for gist search.
//!
//! The `App` bundles the search state machine, the debounce timer, the fetch
//! worker handle, and UI affordances such as the input widget and table
//! selection. The event loop in [`runtime`] drives it to completion.

mod actions;
mod input;
mod render;
mod runtime;
mod theme;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

pub use runtime::run;

use crate::config::Config;
use crate::github::GistRecord;
use crate::languages::LanguageMap;
use crate::search::{Debounce, FetchCommand, FetchResult, FetchRuntime, SearchEvent, SearchState};
use input::SearchInput;
use theme::Theme;

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
    pub(crate) state: SearchState,
    pub(crate) languages: LanguageMap,
    pub(crate) input: SearchInput<'a>,
    pub(crate) table_state: TableState,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) debounce: Debounce,
    pub(crate) fetch: FetchRuntime,
    pub(crate) theme: Theme,
}

impl Drop for App<'_> {
    fn drop(&mut self) {
        self.fetch.shutdown();
    }
}

impl<'a> App<'a> {
    pub(crate) fn new(
        config: &Config,
        command_tx: Sender<FetchCommand>,
        result_rx: Receiver<FetchResult>,
        latest_query_id: Arc<AtomicU64>,
    ) -> Self {
        Self {
            state: SearchState::new(),
            languages: LanguageMap::default(),
            input: SearchInput::new(config.initial_query.clone()),
            table_state: TableState::default(),
            throbber_state: ThrobberState::default(),
            debounce: Debounce::new(config.debounce),
            fetch: FetchRuntime::new(command_tx, result_rx, latest_query_id),
            theme: Theme::default(),
        }
    }

    /// Drain any worker results waiting on the receiver channel.
    pub(crate) fn pump_fetch_results(&mut self) {
        loop {
            match self.fetch.try_recv() {
                Ok(FetchResult::Mapping(Ok(entries))) => {
                    tracing::info!(count = entries.len(), "language mapping loaded");
                    self.languages = LanguageMap::new(entries);
                    self.state.apply(SearchEvent::MappingLoaded);
                    self.hydrate_initial_query();
                }
                Ok(FetchResult::Mapping(Err(_))) => {
                    self.state.apply(SearchEvent::MappingFailed);
                }
                Ok(FetchResult::Search { id, outcome }) => {
                    if !self.fetch.matches_latest(id) {
                        tracing::debug!(id, "dropping stale fetch result");
                        continue;
                    }
                    self.fetch.record_completion();
                    match outcome {
                        Ok(records) => self.state.apply(SearchEvent::FetchSucceeded(records)),
                        Err(_) => self.state.apply(SearchEvent::FetchFailed),
                    }
                    self.ensure_selection();
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Issue a fetch once the debounce window has elapsed.
    pub(crate) fn poll_debounce(&mut self, now: Instant) {
        if let Some(keyword) = self.debounce.poll(now) {
            self.fetch.issue_fetch(keyword);
        }
    }

    /// Kick off a search for a username seeded on the command line.
    fn hydrate_initial_query(&mut self) {
        let keyword = self.input.text().to_string();
        if keyword.is_empty() {
            return;
        }
        self.state
            .apply(SearchEvent::KeywordChanged(keyword.clone()));
        self.debounce.note_keystroke(&keyword, Instant::now());
    }

    /// Records that the renderer actually shows: gists without a description
    /// stay in `results` but are skipped here.
    pub(crate) fn visible_records(&self) -> Vec<&GistRecord> {
        self.state
            .results
            .iter()
            .filter(|record| record.display_description().is_some())
            .collect()
    }

    pub(crate) fn visible_len(&self) -> usize {
        self.state
            .results
            .iter()
            .filter(|record| record.display_description().is_some())
            .count()
    }

    /// Ensure the row selection remains valid for the current result list.
    pub(crate) fn ensure_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.table_state.select(None);
        } else if let Some(selected) = self.table_state.selected() {
            if selected >= len {
                self.table_state.select(Some(len - 1));
            }
        } else {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let next = self.table_state.selected().map_or(0, |s| s.saturating_sub(1));
        self.table_state.select(Some(next));
    }

    pub(crate) fn move_selection_down(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map_or(0, |s| (s + 1).min(len - 1));
        self.table_state.select(Some(next));
    }
}
