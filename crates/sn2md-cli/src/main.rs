//! sn2md - Convert a Standard Notes JSON export into Markdown files
//!
//! Writes one `.md` file per note into the current directory.

mod cli;
mod commands;
mod error;


use clap::Parser;
use sn2md_core::ExportOptions;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::convert::run_convert;
use crate::error::CliError;

const DEFAULT_LOG_DIRECTIVES: &str = "sn2md=info,sn2md_core=warn";

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run_convert(&cli.input_file, &ExportOptions::default())
}
