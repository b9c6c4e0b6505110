use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod fragments;
mod services;

pub use cli::{Cli, Commands};
pub use commands::{handle_build_command, handle_inspect_commands};
pub use domain::errors::StitchError;
pub use domain::models::{BuildReport, CheckReport};
pub use services::assemble::{render, write_assembly};
pub use services::config::{load_config, resolve_settings, Settings};
pub use services::output::{print_error, print_one, print_out};
pub use services::pipeline::load_plan;

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let output = match &cli.command {
        Commands::Build { output } => output.as_deref(),
        _ => None,
    };
    let settings = resolve_settings(cli, config, output);
    tracing::debug!(
        root = %settings.root.display(),
        output = %settings.output.display(),
        extensions = ?settings.extensions,
        "resolved settings"
    );

    if handle_build_command(cli, &settings)? {
        return Ok(());
    }
    handle_inspect_commands(cli, &settings)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(err) = run(&cli) {
        print_error(cli.json, &err);
        std::process::exit(1);
    }
}
