use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::search::SearchEvent;

impl App<'_> {
    /// Process a keyboard event. Returns `true` when the user exits.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => {
                // Keystrokes reach the input only once the mapping has loaded.
                if self.state.input_enabled() && self.input.input(key) {
                    self.on_keyword_changed();
                }
            }
        }
        false
    }

    /// Record the edited keyword and re-arm the debounce window.
    fn on_keyword_changed(&mut self) {
        let keyword = self.input.text().to_string();
        self.debounce.note_keystroke(&keyword, Instant::now());
        self.state.apply(SearchEvent::KeywordChanged(keyword));
        self.ensure_selection();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicU64;
    use std::sync::mpsc;
    use std::time::Duration;

    use super::*;
    use crate::config::Config;
    use crate::search::Phase;

    fn test_app() -> App<'static> {
        let (command_tx, _command_rx) = mpsc::channel();
        let (_result_tx, result_rx) = mpsc::channel();
        let config = Config {
            initial_query: String::new(),
            debounce: Duration::from_millis(1500),
            mapping_url: "http://localhost/mapping.json".to_string(),
        };
        App::new(
            &config,
            command_tx,
            result_rx,
            Arc::new(AtomicU64::new(0)),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn escape_exits() {
        let mut app = test_app();
        assert!(app.handle_key(press(KeyCode::Esc)));
    }

    #[test]
    fn typing_is_ignored_before_the_mapping_loads() {
        let mut app = test_app();
        assert!(!app.handle_key(press(KeyCode::Char('a'))));
        assert_eq!(app.state.phase, Phase::Initializing);
        assert!(!app.debounce.is_armed());
    }

    #[test]
    fn typing_arms_the_debounce_and_marks_pending() {
        let mut app = test_app();
        app.state.apply(SearchEvent::MappingLoaded);

        app.handle_key(press(KeyCode::Char('a')));
        assert_eq!(app.state.phase, Phase::Pending);
        assert_eq!(app.state.keyword, "a");
        assert!(app.debounce.is_armed());
    }

    #[test]
    fn clearing_the_input_goes_idle_and_disarms() {
        let mut app = test_app();
        app.state.apply(SearchEvent::MappingLoaded);

        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.state.phase, Phase::Idle);
        assert!(!app.debounce.is_armed());
    }
}
