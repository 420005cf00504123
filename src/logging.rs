//! Logger setup.
//!
//! `-v` raises the level one step at a time. `browse` owns the terminal,
//! so it only logs when a `--log-file` is given.

use std::fs::File;
use std::path::Path;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::error::CatalogResult;

/// Map the `-v` count to a level filter.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger for this run.
pub fn init(verbose: u8, log_file: Option<&Path>, interactive: bool) -> CatalogResult<()> {
    let level = level_for(verbose);

    if let Some(path) = log_file {
        let file = File::create(path)?;
        WriteLogger::init(level, Config::default(), file)?;
        log::info!("logging to {}", path.display());
        return Ok(());
    }

    if interactive {
        return Ok(());
    }

    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}
