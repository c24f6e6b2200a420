use anyhow::Result;
use clap::Parser;

use gisthub::cli::CliArgs;
use gisthub::{Config, logging};

fn main() -> Result<()> {
    let cli = CliArgs::parse();
    let config = Config::from_cli(&cli)?;
    logging::init()?;
    gisthub::run(config)
}
