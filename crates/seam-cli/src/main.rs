//! seam - SQL migration bookkeeping for SQLite.
//!
//! One fully sequential run: discover migration files, load and
//! checksum each in sorted order, open the ledger database, then apply
//! whatever is not yet recorded. Any failure is fatal, logged once,
//! and terminates the process with a non-zero status.

use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use seam_core::{discover, load, PipelineResult, SeamErrorCode};
use seam_storage::{apply, connection, schema};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    if cli.conn.is_empty() || cli.dir.is_empty() {
        // Required inputs missing: usage and exit before any I/O.
        eprintln!("{}", cli::Cli::command().render_help());
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> PipelineResult<()> {
    let dir = Path::new(&cli.dir);

    let set = discover(dir)?;
    let mut migrations = Vec::with_capacity(set.files.len());
    for file in &set.files {
        migrations.push(load(dir, file)?);
    }

    let mut conn = connection::open(&cli.conn)?;
    schema::ensure_ledger(&conn)?;
    apply::sync(&mut conn, &migrations)?;
    Ok(())
}
