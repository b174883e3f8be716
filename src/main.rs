use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use regex_extractor::input::{self, InputSource};
use regex_extractor::{extract_selected, extract_selected_parallel, report};
use regex_extractor::{Category, CategoryOutcome, ExtractionObserver};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Extract emails, URLs, phone numbers, times and hashtags from text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text file to scan; a built-in sample is used when it does not exist
    #[arg(index = 1, default_value = input::DEFAULT_INPUT_FILE)]
    file_path: PathBuf,

    /// Print the JSON document instead of the text report
    #[arg(short, long)]
    json: bool,

    /// Also write the JSON document to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Echo the input text before the report
    #[arg(long)]
    show_input: bool,

    /// Search all categories in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Extract only these categories (comma-separated: email,url,phone,time,hashtag)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_category)]
    categories: Vec<Category>,
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::from_name(value).ok_or_else(|| {
        format!(
            "unknown category '{}' (expected one of: email, url, phone, time, hashtag)",
            value.trim()
        )
    })
}

struct ProgressObserver {
    bar: ProgressBar,
}

impl ExtractionObserver for ProgressObserver {
    fn category_started(&self, category: Category) {
        self.bar.set_message(format!("Searching for {}...", category.plural()));
    }

    fn category_finished(&self, _category: Category, _outcome: &CategoryOutcome) {
        self.bar.inc(1);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let loaded = input::load_or_sample(&args.file_path)?;
    let source = match &loaded.source {
        InputSource::File(path) => path.display().to_string(),
        InputSource::Sample => "sample".to_string(),
    };

    if !args.json {
        let rule = report::rule();
        println!("{}\nREGEX DATA EXTRACTION\n{}\n", rule, rule);
        match &loaded.source {
            InputSource::File(path) => println!("Loaded text from '{}'\n", path.display()),
            InputSource::Sample => println!(
                "'{}' not found. Using default sample text.\n",
                args.file_path.display()
            ),
        }
        if args.show_input {
            println!("Input Text:\n{}\n{}\n{}\n", rule, loaded.text.trim_end(), rule);
        }
    }

    let selected: &[Category] = if args.categories.is_empty() {
        &Category::ALL
    } else {
        &args.categories
    };

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(selected.len() as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:20.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"));
        pb
    };
    let observer = ProgressObserver { bar };

    let extraction = if args.parallel {
        extract_selected_parallel(&loaded.text, selected, &observer)
    } else {
        extract_selected(&loaded.text, selected, &observer)
    };
    observer.bar.finish_and_clear();

    let doc = report::render_json(&extraction, &source);

    if let Some(path) = &args.output {
        fs::write(path, serde_json::to_string_pretty(&doc)?)?;
        if !args.json {
            println!("Results written to {}\n", path.display());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", report::render_text(&extraction));
    }

    Ok(())
}
