//! Sprinkle CLI - deterministic sprinkle-border generation
//!
//! This binary validates sprinkle-border specs and renders them to SVG.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use sprinkle_cli::commands;

/// Sprinkle - deterministic decorative border generation
#[derive(Parser)]
#[command(name = "sprinkle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a spec file to an SVG document
    Generate {
        /// Path to the spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Directory output paths are resolved against
        #[arg(short, long, default_value = ".")]
        out_root: String,

        /// Override the spec's seed (pins the output)
        #[arg(long)]
        seed: Option<String>,
    },

    /// Validate a spec file and report errors and warnings
    Validate {
        /// Path to the spec file (JSON)
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            spec,
            out_root,
            seed,
        } => commands::generate::run(&spec, &out_root, seed.as_deref()),
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
