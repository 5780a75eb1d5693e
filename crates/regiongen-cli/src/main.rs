//! regiongen CLI - Regenerate marked regions of game builder sources
//!
//! Commands:
//! - `regiongen run` - Regenerate every configured target
//! - `regiongen check` - Validate the configuration and schemas
//! - `regiongen index` - Export the dispatch index as JSON
//! - `regiongen markers` - List registries and their markers
//! - `regiongen init` - Write a starter regiongen.toml

use clap::{Parser, Subcommand};
use regiongen_core::CONFIG_FILENAME;
use std::path::PathBuf;
use std::process::ExitCode;

mod index;
mod init;
mod logging;
mod markers;
mod run;
mod session;

#[derive(Parser)]
#[command(name = "regiongen")]
#[command(author, version, about = "Region-based source generator", long_about = None)]
struct Cli {
    /// Path to regiongen.toml
    #[arg(short, long, global = true, default_value = CONFIG_FILENAME)]
    config: PathBuf,

    /// More log output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate every marked region of every configured target
    Run {
        /// Report which files would change without writing them
        #[arg(long)]
        dry_run: bool,

        /// Exit with status 2 if any file is out of date (implies --dry-run)
        #[arg(long)]
        check: bool,

        /// Treat missing networking annotations as errors
        #[arg(long)]
        strict: bool,
    },

    /// Validate the configuration and schemas without touching any target
    Check {
        /// Treat missing networking annotations as errors
        #[arg(long)]
        strict: bool,
    },

    /// Write the dispatch index as JSON
    Index {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registries and their markers
    Markers {
        /// Only this registry
        registry: Option<String>,
    },

    /// Write a starter regiongen.toml
    Init {
        /// Output path (default: the --config path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Run {
            dry_run,
            check,
            strict,
        } => {
            return run::run(
                &cli.config,
                run::RunOptions {
                    dry_run,
                    check,
                    strict,
                },
            );
        }
        Commands::Check { strict } => {
            run::check(&cli.config, strict)?;
        }
        Commands::Index { output } => {
            index::run(&cli.config, output.as_deref())?;
        }
        Commands::Markers { registry } => {
            markers::run(registry.as_deref())?;
        }
        Commands::Init { output, force } => {
            init::run(output.as_ref().unwrap_or(&cli.config), force)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
