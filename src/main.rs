//! bountiful - layered bounty data resolver
//!
//! Merge same-named pool and decree files across namespaces, drop invalid
//! entries and print what ends up registered.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use bountiful::Result;
use bountiful::app::AppContext;
use bountiful::cli::Cli;
use bountiful::cli::output::{emit_json, robot_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.robot {
                // The pass output was already emitted; don't follow it with a second document
                if !matches!(e, bountiful::BountifulError::StrictFailure(_)) {
                    let code = match &e {
                        bountiful::BountifulError::NotFound(_) => "not_found",
                        bountiful::BountifulError::Config(_)
                        | bountiful::BountifulError::MissingConfig(_) => "config",
                        bountiful::BountifulError::Source(_) => "source",
                        _ => "error",
                    };
                    if emit_json(&robot_error(code, e.to_string())).is_err() {
                        eprintln!("Error: {e}");
                    }
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    bountiful::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,bountiful=info",
        1 => "info,bountiful=debug",
        2 => "debug,bountiful=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
