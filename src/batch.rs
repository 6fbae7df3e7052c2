// WHY: Batch driver that runs the composer over every article × etymology pair
// and writes qualifying records, one per line, to the output file

use crate::composer::EntryComposer;
use crate::corpus::{ArticleCorpus, DialectGraph};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

/// Configuration for a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Only process the article with this headword
    pub only: Option<String>,
    /// Stop after this many articles
    pub limit: Option<usize>,
    /// Show a console progress bar
    pub show_progress: bool,
}

/// Statistics for one batch run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of articles visited
    pub articles_processed: u64,
    /// Number of etymology records visited
    pub etymologies_seen: u64,
    /// Number of records produced
    pub records_written: u64,
    /// Etymologies that did not qualify for a record
    pub etymologies_omitted: u64,
    /// Dialect references whose group key is absent from the dialect graph
    pub missing_groups: u64,
    /// Composition time in milliseconds
    pub processing_time_ms: u64,
}

/// Runs the composer over a whole corpus
pub struct BatchDriver {
    composer: EntryComposer,
    config: BatchConfig,
}

impl BatchDriver {
    pub fn new(composer: EntryComposer, config: BatchConfig) -> Self {
        Self { composer, config }
    }

    /// Compose every qualifying record, in corpus order
    pub fn compose_all(&self, corpus: &ArticleCorpus, graph: &DialectGraph) -> (Vec<String>, BatchStats) {
        let start_time = std::time::Instant::now();
        let mut stats = BatchStats::default();
        let mut records = Vec::new();

        let articles = corpus
            .iter()
            .filter(|(name, _)| self.config.only.as_deref().map_or(true, |only| only == *name))
            .take(self.config.limit.unwrap_or(usize::MAX));

        let total = self
            .config
            .limit
            .map_or(corpus.len(), |limit| limit.min(corpus.len()));
        let progress = self.progress_bar(total as u64);

        for (article_name, article) in articles {
            stats.articles_processed += 1;
            for (_, record) in article.iter() {
                stats.etymologies_seen += 1;
                let outcome = self.composer.compose(article_name, record, graph, corpus);
                stats.missing_groups += outcome.missing_groups as u64;
                match outcome.record {
                    Some(line) => {
                        stats.records_written += 1;
                        records.push(line);
                    }
                    None => stats.etymologies_omitted += 1,
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        stats.processing_time_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Composed {} records from {} etymologies across {} articles",
            stats.records_written, stats.etymologies_seen, stats.articles_processed
        );
        (records, stats)
    }

    /// Compose the corpus and write the records to `output`
    pub async fn run(&self, corpus: &ArticleCorpus, graph: &DialectGraph, output: &Path) -> Result<BatchStats> {
        let (records, stats) = self.compose_all(corpus, graph);
        write_records(output, &records).await?;
        info!("Wrote {} records to {}", records.len(), output.display());
        Ok(stats)
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template("{bar:40} {pos}/{len} articles [{elapsed_precise}<{eta_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        ProgressBar::new(total).with_style(style)
    }
}

/// Write records to `path`, one per line
pub async fn write_records(path: &Path, records: &[String]) -> Result<()> {
    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writer.write_all(record.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(())
}

/// Write run statistics as pretty JSON
pub async fn write_stats(path: &Path, stats: &BatchStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write stats file {}", path.display()))?;
    Ok(())
}
