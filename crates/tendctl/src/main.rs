//! Tend - self-guided daily micro-practice tracker.

use anyhow::Result;
use clap::Parser;
use tendctl::cli::{Cli, Commands};
use tendctl::commands;

fn main() -> Result<()> {
    // Logging goes to stderr so it never mixes with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Today => commands::today::today(),
        Commands::Practice { pick } => commands::practice::practice(pick),
        Commands::Modules => commands::modules::modules(),
        Commands::Journal { limit } => commands::journal::journal(limit),
        Commands::Config { set } => commands::config::config(set),
        Commands::Reset { yes } => commands::reset::reset(yes),
    }
}
