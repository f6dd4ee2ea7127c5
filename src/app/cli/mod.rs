//! CLI Adapter.

mod new;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "recomp")]
#[command(version)]
#[command(
    about = "Scaffold React component directories from named templates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a component directory with an index file, a component file,
    /// and optional stylesheet and story files
    #[clap(visible_alias = "n")]
    New {
        /// Component name, also used as the directory name
        name: String,
        /// Scaffold kind (basic, with-style, with-style-and-story)
        #[arg(short, long)]
        kind: Option<String>,
        /// Directory in which to create the component directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Print the scaffold report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments and dispatch to the command implementations.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New { name, kind, dir, json } => new::run_new(&dir, &name, kind.as_deref(), json),
    }
}
