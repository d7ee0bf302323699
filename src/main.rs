use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod core;
mod error;
mod models;

use crate::commands::{
    check_split, confirm_split, preview_split, resolve_inputs, restore_manifest, run_split,
    stdin_is_interactive,
};
use crate::core::open_project;
use crate::error::{GlossplitError, EXIT_PRECONDITION};

/// Glossplit - split a Markdown glossary into one file per term
#[derive(Parser)]
#[command(name = "glossplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root containing the manifest (defaults to current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Manifest path relative to the project root
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the glossary into term files and update the manifest
    Split {
        /// Glossary file as listed in markdown_paths
        #[arg(short, long)]
        source: Option<String>,

        /// Directory for the term files
        #[arg(short, long)]
        output: Option<String>,

        /// Skip prompts and use defaults for missing paths (required when stdin
        /// is not a terminal)
        #[arg(short, long)]
        yes: bool,

        /// Do not repair the glossary file before splitting
        #[arg(long)]
        no_fix: bool,
    },

    /// Check whether it is safe to split
    Check {
        #[arg(short, long)]
        source: Option<String>,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the files and manifest order a split would produce
    Preview {
        #[arg(short, long)]
        source: Option<String>,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// Restore the manifest from its pre-split snapshot
    Restore,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), GlossplitError> {
    let project_root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Split {
            source,
            output,
            yes,
            no_fix,
        } => {
            let project = open_project(&project_root, cli.manifest, no_fix)?;
            let interactive = stdin_is_interactive();
            let (source, output) = resolve_inputs(&project, source, output, !yes && interactive)?;
            let confirmation = confirm_split(yes, interactive)?;
            run_split(&project, &source, &output, confirmation).map(|_| ())
        }

        Commands::Check { source, output } => {
            let project = open_project(&project_root, cli.manifest, false)?;
            let (source, output) = resolve_inputs(&project, source, output, false)?;
            let report = check_split(&project, &source, &output);
            if !report.passed() {
                std::process::exit(EXIT_PRECONDITION);
            }
            Ok(())
        }

        Commands::Preview { source, output } => {
            let project = open_project(&project_root, cli.manifest, false)?;
            let (source, output) = resolve_inputs(&project, source, output, false)?;
            preview_split(&project, &source, &output).map(|_| ())
        }

        Commands::Restore => {
            let project = open_project(&project_root, cli.manifest, false)?;
            restore_manifest(&project)
        }
    }
}
