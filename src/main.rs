//! svncl - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use svncl::changelog::{generate_summary, write_changelog};
use svncl::svn::{DEFAULT_MARKERS, DefaultExecutor, Markers};
use svncl::{GenerateOptions, exit_codes, generate};

/// Generate a changelog from svn log history.
#[derive(Parser, Debug)]
#[command(name = "svncl")]
#[command(about = "Generate a changelog from svn log history")]
#[command(version)]
struct Cli {
    /// svn working copy or repository URL to read the log from
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Pre-fetched `svn log --xml` output (svn is not invoked)
    #[arg(long)]
    xml: Option<PathBuf>,

    /// Previous changelog; bullets already in it are not repeated
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to changelog file
    #[arg(short = 'o', long, default_value = "CHANGELOG.md")]
    output: PathBuf,

    /// Marker keyword a commit message must contain (repeatable)
    #[arg(short = 'm', long = "marker", default_values_t = DEFAULT_MARKERS.map(String::from))]
    markers: Vec<String>,

    /// Dry run - print changelog without writing
    #[arg(long)]
    dry_run: bool,

    /// Exit with a distinct code when no log data was available
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR as u8)
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    info!("Generating changelog for {}", cli.path.display());
    info!(
        "xml log file: {}",
        cli.xml.as_ref().map_or("none".into(), |p| p.display().to_string())
    );
    info!(
        "input changelog: {}",
        cli.input.as_ref().map_or("none".into(), |p| p.display().to_string())
    );
    info!("output file: {}", cli.output.display());

    let options = GenerateOptions {
        repo_path: cli.path,
        xml_file: cli.xml,
        prior_changelog: cli.input,
        markers: Markers::new(cli.markers),
    };

    let today = Local::now().date_naive();
    let report = generate(&options, &DefaultExecutor, today).await;

    if cli.dry_run {
        print!("{}", report.changelog.text);
    } else {
        write_changelog(&cli.output, &report.changelog.text)
            .with_context(|| format!("Failed to write {}", cli.output.display()))?;

        println!("✓ {}", generate_summary(&report.changelog, &cli.output));
    }

    if cli.strict && !report.log_available {
        return Ok(exit_codes::NO_DATA);
    }

    Ok(exit_codes::SUCCESS)
}
