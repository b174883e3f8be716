use clap::Parser;
use regex_extractor::extract_line_findings;
use regex_extractor::input::load_text;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Export validated findings per line as JSON")]
struct Args {
    /// Text file to scan
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Process only first N lines (default: 1000)
    #[arg(short, long, default_value = "1000")]
    limit: usize,

    /// Output JSON file path
    #[arg(short, long, default_value = "findings.json")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("Processing file: {}", args.file_path.display());
    let text = load_text(&args.file_path)?;

    let limited: String = text
        .lines()
        .take(args.limit)
        .collect::<Vec<_>>()
        .join("\n");
    let line_count = limited.lines().count();

    let findings = extract_line_findings(&limited);
    info!(findings = findings.len(), lines = line_count, "scan finished");

    println!("Found {} values in {} lines", findings.len(), line_count);
    std::fs::write(&args.output, serde_json::to_string_pretty(&findings)?)?;
    println!("Results written to {}", args.output.display());

    Ok(())
}
