use std::time::Duration;

use clap::Parser;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use feedpane::cli::{Cli, Commands};
use feedpane::config::Config;
use feedpane::domain::FeedDescriptor;
use feedpane::errors::ReaderResult;
use feedpane::fetch::HttpEntryFetcher;
use feedpane::registry::FeedRegistry;
use feedpane::services::{FeedReader, LoadReport};

type HttpReader = FeedReader<HttpEntryFetcher>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ReaderResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the widget
    let registry = FeedRegistry::with_defaults();
    let fetcher = HttpEntryFetcher::new(Duration::from_secs(config.timeout_secs));
    let mut reader = FeedReader::new(registry, fetcher, config.load_policy());

    match cli.command {
        Commands::List { json } => cmd_list(&reader, json),
        Commands::Load { index, json } => cmd_load(&mut reader, index, json),
        Commands::Add { name, url } => cmd_add(&mut reader, &name, &url),
    }
}

fn cmd_list(reader: &HttpReader, json: bool) -> ReaderResult<()> {
    if json {
        let feeds: Vec<_> = reader.registry().iter().collect();
        println!("{}", serde_json::to_string_pretty(&feeds)?);
        return Ok(());
    }

    println!("Registered feeds:\n");
    for (index, descriptor) in reader.registry().iter().enumerate() {
        println!("  {}. {}", index, descriptor.name());
        println!("     URL: {}", descriptor.url());
    }

    Ok(())
}

fn cmd_load(reader: &mut HttpReader, index: usize, json: bool) -> ReaderResult<()> {
    let runtime = Runtime::new()?;
    let report = runtime.block_on(reader.load(index))?;

    print_pane(reader, &report, json)
}

fn cmd_add(reader: &mut HttpReader, name: &str, url: &str) -> ReaderResult<()> {
    let descriptor = FeedDescriptor::new(name, url)?;
    reader.add_feed(descriptor);

    let index = reader.registry().len() - 1;
    println!("Registered {} at index {}\n", name, index);

    let runtime = Runtime::new()?;
    let report = runtime.block_on(reader.load(index))?;

    print_pane(reader, &report, false)
}

fn print_pane(reader: &HttpReader, report: &LoadReport, json: bool) -> ReaderResult<()> {
    if json {
        let output = serde_json::json!({
            "report": report,
            "entries": reader.pane().entries(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Loaded {} entries from {}:\n", report.rendered, report.feed);
    for entry in reader.pane().entries() {
        println!("  {}", entry.title);
        if let Some(ref link) = entry.link {
            println!("    {}", link);
        }
    }

    Ok(())
}
