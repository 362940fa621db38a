//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub mod commands;
pub mod output;

pub use commands::Commands;
use output::OutputMode;

#[derive(Parser, Debug)]
#[command(
    name = "bountiful",
    version,
    about = "Resolve layered bounty data across namespaces"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content root holding one directory per namespace
    #[arg(long, global = true, env = "BOUNTIFUL_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Use this config file instead of the global and project ones
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit JSON on stdout and JSON logs on stderr
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        if self.robot {
            OutputMode::Robot
        } else {
            OutputMode::Human
        }
    }
}
