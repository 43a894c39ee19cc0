use anyhow::{Context, Result};
use clap::Parser;
use resume_extractor::process_document;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cvsift")]
#[command(about = "Extract a structured profile from a plain-text resume")]
struct Cli {
    /// Resume file to process (.txt; PDF/DOCX must be converted upstream)
    input: PathBuf,

    /// Write the JSON report here instead of a timestamped file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let response = process_document(&cli.input)?;

    info!(
        filename = %response.filename,
        quality = ?response.extraction_quality,
        experience_entries = response.profile.experience.len(),
        "extraction complete"
    );

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let output_path = cli.output.unwrap_or_else(|| default_report_path(&cli.input));
    let report = serde_json::to_string_pretty(&response)?;
    std::fs::write(&output_path, report)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

    info!(path = %output_path.display(), "report written");
    println!("✓ Report written to {}", output_path.display());

    Ok(())
}

fn default_report_path(input: &PathBuf) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("resume");
    PathBuf::from(format!(
        "{}_profile_{}.json",
        stem,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ))
}
