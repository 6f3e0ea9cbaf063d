mod marker;
mod validator;

use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use marker::Marker;
use std::{path::PathBuf, process::ExitCode};
use validator::scan_files;

#[derive(Parser)]
#[command(
    name = "lint_bad",
    version,
    about = "Fail if any of the files contain a forbidden marker"
)]
struct Cli {
    /// Substring that files must not contain.
    #[arg(long, default_value = "bad")]
    marker: String,

    /// Maximum number of files to read at once. Defaults to the number
    /// of CPUs.
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Files to check.
    files: Vec<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Only warnings by default; stderr is reserved for the diagnostics.
    let env = Env::new()
        .filter_or("LINT_BAD_LOG", "warn")
        .write_style("LINT_BAD_LOG_STYLE");
    Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let marker = Marker::new(&cli.marker)?;

    let max_parallelism = cli.jobs.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    });

    let violations = scan_files(&cli.files, &marker, max_parallelism, |violation| {
        eprintln!("{violation}");
    })
    .await?;

    Ok(ExitCode::from(if violations.is_empty() { 0 } else { 1 }))
}
