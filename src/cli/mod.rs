//! Command-line interface for git-ownership
//!
//! One-shot tool: walk the tree, blame every file, print per-file and total
//! ownership tables, then the pie chart.

use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::blame::{blame_file, BlameError};
use crate::render;
use crate::scan::discover_files;
use crate::stats::Totals;

/// Per-author line ownership for a git repository, from `git blame`
#[derive(Parser)]
#[command(name = "git-ownership")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository directory to analyze (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let root = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot access {}", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let term = Term::stdout();
    println!("=== GIT FILE OWNERSHIP (BLAME) ===");
    println!("Repository location: {}\n", root.display());

    let files = discover_files(&root)?;
    tracing::debug!(files = files.len(), "discovered files");

    // Explicit fold over the file list; the accumulator is the only state
    // shared across iterations. Files are blamed strictly one at a time.
    let mut totals = Totals::default();
    for file in &files {
        render::print_file_header(file);
        let record = match blame_file(&root, file) {
            Ok(record) => record,
            Err(BlameError::Fatal { stderr }) => {
                eprintln!("Failed to get git-blame data for the current file.");
                eprintln!("{stderr}");
                anyhow::bail!("git blame failed for {}", file.display());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("blaming {}", file.display()));
            }
        };
        render::print_file_report(&record);
        totals.absorb(&record);
    }

    render::print_totals(&term, &totals)
}
