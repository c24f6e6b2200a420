//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;
use crate::config::Config;
use crate::github::GistClient;
use crate::search;

/// Build the client and worker for the provided config and run the UI to
/// completion.
pub fn run(config: Config) -> Result<()> {
    let client = GistClient::new()?;
    let (command_tx, result_rx, latest_query_id) =
        search::spawn(client, config.mapping_url.clone());
    let mut app = App::new(&config, command_tx, result_rx, latest_query_id);
    app.run()
}

impl App<'_> {
    /// Pump the terminal event loop until the user exits.
    pub(crate) fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<()> = 'event_loop: loop {
            loop {
                match event_rx.try_recv() {
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            let mut exit = false;
            while let Some(event) = pending_events.pop_front() {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            exit = true;
                            break;
                        }
                    }
                    _ => {}
                }
            }

            if exit {
                break Ok(());
            }

            self.pump_fetch_results();
            self.poll_debounce(Instant::now());
            self.throbber_state.calc_next();

            terminal.draw(|frame| self.draw(frame))?;

            thread::sleep(Duration::from_millis(16));
        };

        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }
}
