//! Terminal logging setup.
//!
//! Log output always goes to stderr so the diagnostic report on stdout stays
//! machine-consumable. Verbose mode additionally enables debug records, which
//! include the exact tool command lines.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize stderr logging. Safe to call once per process.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
