//! Rollcall CLI - reconcile rosters against form responses.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Serve { .. }, false) => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    let result = match cli.command {
        Commands::Check {
            file,
            url,
            roster,
            name_column,
            config,
            preview,
            json,
            output,
        } => commands::check::run(
            commands::check::CheckArgs {
                file,
                url,
                roster,
                name_column,
                config,
                preview,
                json,
                output,
            },
            cli.verbose,
        ),

        Commands::Detect {
            file,
            name_column,
            config,
            json,
        } => commands::detect::run(file, name_column, config, json, cli.verbose),

        Commands::Serve {
            bind,
            port,
            timeout_secs,
        } => commands::serve::run(bind, port, timeout_secs),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
