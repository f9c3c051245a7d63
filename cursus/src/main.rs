// cursus/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug cursus evaluate ... to see per-student details.
    // Logs go to stderr so stdout stays machine-readable (--format json).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            config,
            input,
            output,
            format,
        } => commands::evaluate::execute(config, input, output, format),

        Commands::Compute {
            config,
            cc,
            exam,
            subject_type,
        } => commands::compute::execute(config, cc, exam, subject_type),

        Commands::Validate { config } => commands::validate::execute(config),

        Commands::Init {
            preset,
            output,
            force,
        } => commands::init::execute(preset, output, force),
    }
}
