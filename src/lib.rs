//! Core crate exports for the `gisthub` terminal interface.
//!
//! The pipeline is: keystrokes feed a trailing-edge debounce, the debounce
//! feeds a background fetch worker that talks to the GitHub gist API, and the
//! worker's results flow back into a single reducer-driven search state that
//! the TUI renders. A static extension-to-language document, loaded once at
//! startup, labels each gist's files.

pub mod app_dirs;
pub mod cli;
pub mod config;
pub mod github;
pub mod languages;
pub mod logging;
pub mod search;
pub mod ui;

pub use config::Config;
pub use ui::run;
