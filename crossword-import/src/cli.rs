//!
//! This module implements the CLI interface for crossword-import: argument
//! parsing, config loading, wiring the real HTTP clients into the core
//! pipeline, and the user-visible messages on stdout/stderr.
//!
//! All conversion and transport logic lives in [`crossword-import-core`].
//! This module is strictly glue.
//!
//! [`crossword-import-core`]: ../../crossword-import-core/
use crate::load_config::load_config;
use anyhow::Result;
use clap::Parser;
use crossword_import_core::fetch::NytClient;
use crossword_import_core::import::{fetch_and_persist, publish, ImportReport};
use crossword_import_core::upload::SquaresClient;
use crossword_import_core::{ImportError, PuzzleDate};
use std::path::PathBuf;

/// Import a daily crossword as an ipuz file and publish it to squares.io.
#[derive(Parser, Debug)]
#[clap(
    name = "crossword-import",
    version,
    about = "Fetch a daily crossword, save it as ipuz and upload it to squares.io"
)]
pub struct Cli {
    /// Puzzle date in YYYY-MM-DD form
    #[clap(value_parser = parse_date)]
    pub puzzle_date: PuzzleDate,

    /// Optional YAML file overriding endpoints, title and output directory
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Directory the .ipuz file is written to
    #[clap(long)]
    pub output_dir: Option<PathBuf>,

    /// Only write the .ipuz file, do not upload it
    #[clap(long)]
    pub skip_upload: bool,
}

fn parse_date(raw: &str) -> std::result::Result<PuzzleDate, String> {
    PuzzleDate::parse(raw).map_err(|_| "Puzzle date must have format \"YYYY-MM-DD\"".to_string())
}

/// What a successful run produced.
#[derive(Debug)]
pub enum RunOutcome {
    Written(PathBuf),
    Uploaded(ImportReport),
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<RunOutcome> {
    tracing::info!("trace_initialised");

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    config.trace_loaded();

    let date = cli.puzzle_date;
    tracing::info!(date = %date, skip_upload = cli.skip_upload, "Starting import");

    let source = NytClient::new(&config)?;
    let persisted = fetch_and_persist(&config, &date, &source).await?;
    println!("Wrote {}", persisted.path.display());

    if cli.skip_upload {
        tracing::info!("Upload skipped on request");
        return Ok(RunOutcome::Written(persisted.path));
    }

    println!("Uploading to squares.io...");
    let uploader = SquaresClient::new(&config)?;
    let report = publish(&config, persisted, &uploader).await?;
    println!("Puzzle uploaded! View it at {}", report.view_url);

    Ok(RunOutcome::Uploaded(report))
}

/// The message printed to stderr when a run fails.
pub fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ImportError>() {
        Some(ImportError::PuzzleRequest { status, reason }) => format!(
            "NYT responded with error code {status}: {reason}\nDid you enter the date correctly?"
        ),
        Some(ImportError::UploadRequest { reason, .. }) => {
            format!("Failed to upload puzzle: {reason}")
        }
        _ => format!("{err:#}"),
    }
}
