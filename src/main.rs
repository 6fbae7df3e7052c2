use anyhow::Result;
use clap::Parser;
use lectlex::batch::{self, BatchConfig, BatchDriver};
use lectlex::config::LexiconConfig;
use lectlex::corpus;
use lectlex::EntryComposer;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lectlex")]
#[command(about = "Build a flashcard lexicon of pronunciations and dialectal synonyms")]
#[command(version)]
struct Args {
    /// Article pronunciation/etymology data (JSON)
    #[arg(long, default_value = "articledata.json")]
    articles: PathBuf,

    /// Dialectal synonym data (JSON)
    #[arg(long, default_value = "dial.json")]
    dialects: PathBuf,

    /// Output file, one record per line
    #[arg(short, long, default_value = "dict.csv")]
    output: PathBuf,

    /// JSON file overriding the built-in lect and pronunciation tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only process this headword
    #[arg(long)]
    only: Option<String>,

    /// Only process the first N articles
    #[arg(long)]
    limit: Option<usize>,

    /// Use memory-mapped I/O when loading inputs
    #[arg(long)]
    use_mmap: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting lectlex");
    info!(?args, "Parsed CLI arguments");

    for input in [&args.articles, &args.dialects] {
        if !input.is_file() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
    }

    let lexicon_config = match &args.config {
        Some(path) => LexiconConfig::from_json_file(path)?,
        None => LexiconConfig::default(),
    };

    info!("Loading dialect data from {}", args.dialects.display());
    let graph = corpus::load_dialect_graph(&args.dialects, args.use_mmap).await?;
    info!("Loading article data from {}", args.articles.display());
    let articles = corpus::load_article_corpus(&args.articles, args.use_mmap).await?;

    let batch_config = BatchConfig {
        only: args.only.clone(),
        limit: args.limit,
        show_progress: !args.no_progress,
    };
    let driver = BatchDriver::new(EntryComposer::new(lexicon_config), batch_config);
    let stats = driver.run(&articles, &graph, &args.output).await?;

    println!("lectlex v{} - lexicon complete", env!("CARGO_PKG_VERSION"));
    println!("  Articles processed: {}", stats.articles_processed);
    println!("  Records written: {}", stats.records_written);
    if stats.missing_groups > 0 {
        println!("  Missing dialect groups: {}", stats.missing_groups);
    }

    if let Some(ref stats_path) = args.stats_out {
        batch::write_stats(stats_path, &stats).await?;
        info!("Wrote run statistics to {}", stats_path.display());
    }

    Ok(())
}
