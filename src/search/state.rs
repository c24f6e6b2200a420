//! The search state machine.
//!
//! All UI-visible search state lives in one [`SearchState`] value that is
//! advanced exclusively by [`SearchState::apply`]. Events are plain data, so
//! the whole lifecycle is unit-testable without a network or a terminal.

use crate::github::{GistRecord, INIT_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE};

/// Where the search feature currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The language mapping has not loaded yet; the input is not rendered.
    Initializing,
    /// The mapping failed to load; the feature stays disabled.
    InitFailed,
    /// The keyword is empty and nothing is scheduled.
    Idle,
    /// A non-empty keyword is debouncing or its fetch is in flight.
    Pending,
    /// The last cycle completed and `results` reflect it.
    Ready,
    /// The last cycle failed; `error` carries the fixed message.
    Failed,
}

/// Discrete events that advance the search state.
#[derive(Debug)]
pub enum SearchEvent {
    /// The user edited the username input.
    KeywordChanged(String),
    /// The language mapping loaded successfully.
    MappingLoaded,
    /// The language mapping could not be loaded.
    MappingFailed,
    /// The current fetch cycle produced a full result list.
    FetchSucceeded(Vec<GistRecord>),
    /// The current fetch cycle failed (primary or any fork lookup).
    FetchFailed,
}

/// Aggregate search state, replaced only through [`SearchState::apply`].
#[derive(Debug)]
pub struct SearchState {
    pub keyword: String,
    pub phase: Phase,
    pub error: Option<&'static str>,
    pub results: Vec<GistRecord>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            keyword: String::new(),
            phase: Phase::Initializing,
            error: None,
            results: Vec::new(),
        }
    }

    /// Advance the state by one event.
    ///
    /// Stale fetch completions never reach this function; the caller drops
    /// them by query id before applying anything.
    pub fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::KeywordChanged(keyword) => {
                self.keyword = keyword;
                self.results.clear();
                self.error = None;
                self.phase = if self.keyword.is_empty() {
                    Phase::Idle
                } else {
                    Phase::Pending
                };
            }
            SearchEvent::MappingLoaded => {
                if self.phase == Phase::Initializing {
                    self.phase = if self.keyword.is_empty() {
                        Phase::Idle
                    } else {
                        Phase::Pending
                    };
                }
            }
            SearchEvent::MappingFailed => {
                self.phase = Phase::InitFailed;
                self.error = Some(INIT_FAILED_MESSAGE);
                self.results.clear();
            }
            SearchEvent::FetchSucceeded(records) => {
                self.results = records;
                self.error = None;
                self.phase = Phase::Ready;
            }
            SearchEvent::FetchFailed => {
                self.results.clear();
                self.error = Some(SEARCH_FAILED_MESSAGE);
                self.phase = Phase::Failed;
            }
        }
    }

    /// Whether the username input should be rendered and accept keystrokes.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        !matches!(self.phase, Phase::Initializing | Phase::InitFailed)
    }

    /// Whether a spinner should be shown.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Initializing | Phase::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Gist;

    fn record(description: &str) -> GistRecord {
        let gist: Gist = serde_json::from_str(&format!(
            r#"{{
                "id": "g1",
                "description": "{description}",
                "html_url": "https://gist.github.com/g1",
                "files": {{}},
                "forks_url": "https://api.github.com/gists/g1/forks"
            }}"#
        ))
        .expect("decode gist");
        GistRecord {
            gist,
            forks: Vec::new(),
        }
    }

    #[test]
    fn starts_initializing_with_hidden_input() {
        let state = SearchState::new();
        assert_eq!(state.phase, Phase::Initializing);
        assert!(!state.input_enabled());
    }

    #[test]
    fn mapping_load_enables_the_input() {
        let mut state = SearchState::new();
        state.apply(SearchEvent::MappingLoaded);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.input_enabled());
    }

    #[test]
    fn mapping_failure_disables_the_feature() {
        let mut state = SearchState::new();
        state.apply(SearchEvent::MappingFailed);
        assert_eq!(state.phase, Phase::InitFailed);
        assert_eq!(state.error, Some(INIT_FAILED_MESSAGE));
        assert!(!state.input_enabled());
    }

    #[test]
    fn keystroke_clears_previous_cycle() {
        let mut state = SearchState::new();
        state.apply(SearchEvent::MappingLoaded);
        state.apply(SearchEvent::KeywordChanged("alice".to_string()));
        state.apply(SearchEvent::FetchFailed);
        assert_eq!(state.phase, Phase::Failed);

        state.apply(SearchEvent::KeywordChanged("alic".to_string()));
        assert_eq!(state.phase, Phase::Pending);
        assert!(state.error.is_none());
        assert!(state.results.is_empty());
    }

    #[test]
    fn empty_keyword_is_an_explicit_idle_state() {
        let mut state = SearchState::new();
        state.apply(SearchEvent::MappingLoaded);
        state.apply(SearchEvent::KeywordChanged("a".to_string()));
        state.apply(SearchEvent::KeywordChanged(String::new()));
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.is_loading());
        assert!(state.results.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn success_replaces_results_wholesale() {
        let mut state = SearchState::new();
        state.apply(SearchEvent::MappingLoaded);
        state.apply(SearchEvent::KeywordChanged("octocat".to_string()));
        state.apply(SearchEvent::FetchSucceeded(vec![record("Hello")]));
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.results.len(), 1);

        state.apply(SearchEvent::FetchSucceeded(vec![
            record("one"),
            record("two"),
        ]));
        assert_eq!(state.results.len(), 2);
    }

    #[test]
    fn failure_clears_results_and_sets_the_fixed_message() {
        let mut state = SearchState::new();
        state.apply(SearchEvent::MappingLoaded);
        state.apply(SearchEvent::KeywordChanged("octocat".to_string()));
        state.apply(SearchEvent::FetchSucceeded(vec![record("Hello")]));
        state.apply(SearchEvent::KeywordChanged("octoca".to_string()));
        state.apply(SearchEvent::FetchFailed);
        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.error, Some(SEARCH_FAILED_MESSAGE));
        assert!(state.results.is_empty());
    }
}
