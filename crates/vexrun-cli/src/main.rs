//! CLI entry point - the composition root.
//!
//! The only place where the environment is read: `HFS` for the install
//! override, `.env` via dotenvy, and logging configuration.

use clap::Parser;

use vexrun_cli::{Cli, CliError, ExecOptions, run};
use vexrun_core::{InstallLocations, os_descriptor, resolve};

fn try_main(cli: &Cli) -> Result<(), CliError> {
    let locations = InstallLocations::default();
    // Explicit present/absent check; an unset variable just means "scan"
    let override_path = std::env::var("HFS").ok();

    let resolution = resolve(&locations, os_descriptor(), override_path.as_deref())?;

    run::compile_and_run(
        &resolution,
        &cli.source,
        cli.should_run(),
        ExecOptions::default(),
    )
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments (clap exits with code 2 on arity errors)
    let cli = Cli::parse();

    if let Err(err) = try_main(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
