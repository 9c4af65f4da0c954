use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sn2md")]
#[command(about = "Convert Standard Notes JSON export to individual Markdown files")]
#[command(version)]
pub struct Cli {
    /// Path to the Standard Notes JSON export file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,
}
