//! Command-line argument definitions for the `gisthub` binary.

use clap::{ColorChoice, Parser};

/// Command-line arguments accepted by the `gisthub` binary.
#[derive(Parser, Debug)]
#[command(
    name = "gisthub",
    version,
    about = "Search a GitHub user's public gists from the terminal",
    color = ColorChoice::Auto
)]
pub struct CliArgs {
    #[arg(
        value_name = "USERNAME",
        help = "Seed the username input and search once the app starts (default: empty)"
    )]
    pub username: Option<String>,
    #[arg(
        long = "debounce-ms",
        value_name = "MS",
        default_value_t = 1500,
        help = "Idle delay between the last keystroke and the search (default: 1500)"
    )]
    pub debounce_ms: u64,
    #[arg(
        long = "mapping-url",
        value_name = "URL",
        env = "GISTHUB_MAPPING_URL",
        help = "Override the language extension mapping document URL"
    )]
    pub mapping_url: Option<String>,
}
