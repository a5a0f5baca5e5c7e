//! codedsl CLI - Contract source generator
//!
//! Commands:
//! - `codedsl generate` - Render a parsed contract model to source
//! - `codedsl check` - Validate a codedsl.toml manifest
//! - `codedsl defaults` - Print the default manifest

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod logging;
mod manifest;

#[derive(Parser)]
#[command(name = "codedsl")]
#[command(author, version, about = "Template-driven contract generator", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a parsed contract model to source
    Generate {
        /// Path to the model JSON produced by the DSL parser
        #[arg(short, long)]
        model: PathBuf,

        /// Path to codedsl.toml (default: ./codedsl.toml when present)
        #[arg(short = 'c', long)]
        manifest: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a codedsl.toml manifest
    Check {
        /// Path to codedsl.toml (default: ./codedsl.toml)
        #[arg(short = 'c', long)]
        manifest: Option<PathBuf>,
    },

    /// Print the default manifest as TOML
    Defaults,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            model,
            manifest,
            output,
        } => {
            generate::run(&model, manifest.as_deref(), output.as_deref())?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest.as_deref())?;
        }
        Commands::Defaults => {
            manifest::print_defaults()?;
        }
    }

    Ok(())
}
