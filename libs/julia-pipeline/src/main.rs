//! `julia-mesh` command-line entry point.
//!
//! # Commands
//!
//! - `julia-mesh run <config.json>` - Execute a pipeline configuration
//! - `julia-mesh default-config [--dir <dir>]` - Print a configuration that
//!   writes every output under `dir`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use julia_pipeline::{run, OutputPaths, PipelineConfig};
use tracing_subscriber::EnvFilter;

/// Julia set field, boundary and mesh generator
#[derive(Parser)]
#[command(name = "julia-mesh")]
#[command(about = "Generate Julia set fields, boundaries and meshes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline described by a JSON configuration
    Run {
        /// Path to the configuration file
        #[arg(name = "CONFIG")]
        config: PathBuf,

        /// Print the stage report as JSON on completion
        #[arg(long)]
        report: bool,
    },

    /// Print the default configuration as JSON
    DefaultConfig {
        /// Directory the output paths point into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { config, report } => {
            let parsed = PipelineConfig::from_json_file(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            let summary = run(&parsed).context("pipeline run failed")?;
            if report {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Commands::DefaultConfig { dir } => {
            let config = PipelineConfig {
                outputs: OutputPaths::in_dir(dir),
                ..Default::default()
            };
            println!("{}", config.to_json()?);
        }
    }
    Ok(())
}
