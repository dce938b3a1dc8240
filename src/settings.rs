//! Command-line settings
//!
//! Physics is fixed; the only runtime switch is the diagnostic log.

use std::path::PathBuf;

use clap::Parser;

/// Default diagnostic log location, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "bouncy-ball.log";

#[derive(Debug, Clone, Parser)]
#[command(name = "bouncy-ball")]
#[command(about = "A bouncing ball in your terminal. W/A/S/D to fire, Q to quit.", long_about = None)]
#[command(version)]
pub struct Settings {
    /// Write a per-tick diagnostic log
    #[arg(long)]
    pub debug: bool,

    /// Where to write the diagnostic log (with --debug)
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    pub log_path: PathBuf,
}
