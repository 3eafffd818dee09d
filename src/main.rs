use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use sms_triage::cache::{CategoryCache, SledStore};
use sms_triage::classifier::Classifier;
use sms_triage::config::AppConfig;
use sms_triage::logging::{init_logging, OperationTimer};
use sms_triage::models::SmsMessage;
use sms_triage::otp::OtpExtractor;
use sms_triage::search;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a sender address
    Classify {
        /// Raw sender address (TRAI header, phone number, or short code)
        #[arg(short, long)]
        address: String,

        /// JSON file with recent message bodies (array of strings),
        /// newest first, used for content inference
        #[arg(short, long)]
        samples: Option<PathBuf>,

        /// Bypass the classification cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Extract an OTP from a message body
    Otp {
        /// Message body; read from stdin when omitted
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Rank messages against a search query
    Search {
        /// Search query
        #[arg(short, long)]
        query: String,

        /// JSON file with an array of messages to search
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _guard = init_logging(
        Some(&config.logging.level),
        config.logging.file_path.as_deref().map(Path::new),
    )?;
    sms_triage::metrics::describe();

    match cli.command {
        Commands::Classify {
            address,
            samples,
            no_cache,
        } => classify(&config, &address, samples.as_deref(), no_cache),
        Commands::Otp { body } => otp(&config, body),
        Commands::Search { query, input } => run_search(&config, &query, &input),
    }
}

fn classify(
    config: &AppConfig,
    address: &str,
    samples: Option<&Path>,
    no_cache: bool,
) -> Result<()> {
    let bodies: Vec<String> = match samples {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read samples from {}", path.display()))?;
            serde_json::from_str(&data).context("Samples file must be a JSON array of strings")?
        }
        None => Vec::new(),
    };

    let classifier = Classifier::with_sample_size(config.classifier.sample_size)?;
    let timer = OperationTimer::new("classify");

    let category = if no_cache {
        classifier.classify(address, &bodies)
    } else {
        let store = SledStore::open(Path::new(&config.cache.directory))?;
        let cache = CategoryCache::new(store, classifier);
        cache.get_or_compute(address, &bodies)?
    };

    timer.finish();
    println!("{category}");
    Ok(())
}

fn otp(config: &AppConfig, body: Option<String>) -> Result<()> {
    let body = match body {
        Some(body) => body,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read message body from stdin")?;
            buffer
        }
    };

    let extractor = OtpExtractor::with_limits(config.otp.max_body_chars, config.otp.keyword_window)?;
    if let Some(code) = extractor.extract(&body) {
        println!("{code}");
    }
    Ok(())
}

fn run_search(config: &AppConfig, query: &str, input: &Path) -> Result<()> {
    let data = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read messages from {}", input.display()))?;
    let messages: Vec<SmsMessage> =
        serde_json::from_str(&data).context("Input file must be a JSON array of messages")?;

    let timer = OperationTimer::new("search");
    let results = search::search(&messages, query);
    timer.finish();

    info!(query, total = results.len(), "Search complete");

    let limit = results.len().min(config.search.max_results);
    println!("{}", serde_json::to_string_pretty(&results[..limit])?);
    Ok(())
}
