//! End-to-end ingestion pipeline: parse → persist → fold → report.
//!
//! Stages run strictly in order, each to completion:
//! 1. Parse the transaction log into quantity events (`flux-ingest`).
//! 2. Write the parsed-events dump under the reports directory.
//! 3. Append the events to `products` in one transaction (`flux-db`).
//! 4. Seed the `company` catalog when a seed file was given.
//! 5. Fold a SKU-sorted scan into change sequences and rank them.
//! 6. Write the ranked, net-stock-change, and stable-SKU reports.
//!
//! Nothing is written before the whole log parses: a malformed line aborts
//! the run with the reports directory untouched.

use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use flux_core::aggregate::ChangeFormula;
use flux_core::catalog::CatalogInfo;
use flux_core::rank::rank_by_volatility;
use flux_core::report::{NetChangeEntry, RankedEntry, StableEntry};
use flux_core::sequence::SequenceBuilder;
use flux_core::stability::{is_stable, split_stability};
use flux_db::FluxDb;

use crate::progress::Progress;
use crate::reports;

pub const PARSED_EVENTS_FILE: &str = "parsed_events.txt";
pub const RANKED_CHANGES_FILE: &str = "ranked_changes.txt";
pub const NET_STOCK_CHANGES_FILE: &str = "net_stock_changes.txt";
pub const STABLE_SKUS_FILE: &str = "stable_skus.txt";

/// One full ingestion-and-report run over a single transaction log.
pub struct StockPipeline {
    log_file: PathBuf,
    catalog_file: Option<PathBuf>,
    db_path: String,
    reports_dir: PathBuf,
}

/// Counters and locations reported after a successful run.
#[derive(Debug, Serialize)]
pub struct PipelineSummary {
    pub events: usize,
    pub catalog_rows: usize,
    pub sequences: usize,
    pub volatile_skus: usize,
    pub stable_skus: usize,
    pub reports_dir: String,
    pub finished_at: DateTime<Utc>,
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "events ingested:  {}", self.events)?;
        writeln!(f, "catalog rows:     {}", self.catalog_rows)?;
        writeln!(
            f,
            "change sequences: {} ({} volatile, {} stable)",
            self.sequences, self.volatile_skus, self.stable_skus
        )?;
        write!(f, "reports dir:      {}", self.reports_dir)
    }
}

impl StockPipeline {
    #[must_use]
    pub fn new(
        log_file: PathBuf,
        catalog_file: Option<PathBuf>,
        db_path: String,
        reports_dir: PathBuf,
    ) -> Self {
        Self {
            log_file,
            catalog_file,
            db_path,
            reports_dir,
        }
    }

    /// Run every stage in order and return the run summary.
    pub async fn run(&self) -> anyhow::Result<PipelineSummary> {
        // Stage 1: parse. A failure here leaves the filesystem untouched.
        let spinner = Progress::spinner("Parsing transaction log");
        let events = match flux_ingest::transaction::read_log_file(&self.log_file) {
            Ok(events) => events,
            Err(error) => {
                spinner.finish_err("Parsing data failed.");
                return Err(error.into());
            }
        };
        spinner.finish_ok("Parsing data operation completed.");
        tracing::debug!(count = events.len(), "parsed quantity events");

        // Stage 2: parsed-events dump.
        let spinner = Progress::spinner("Writing parsed events");
        std::fs::create_dir_all(&self.reports_dir).with_context(|| {
            format!(
                "failed to create reports directory at {}",
                self.reports_dir.display()
            )
        })?;
        reports::write_parsed_events(&self.reports_dir.join(PARSED_EVENTS_FILE), &events)?;
        spinner.finish_ok("Parsed events file creation operation completed.");

        // Stage 3: append events to the products table.
        let spinner = Progress::spinner("Writing products database");
        let db = FluxDb::open_local(&self.db_path).await?;
        let inserted = db.insert_events(&events).await?;
        spinner.finish_ok("Products database writing operation completed.");
        tracing::debug!(inserted, "stored quantity events");

        // Stage 4: catalog seed, when given.
        let catalog_rows = match &self.catalog_file {
            Some(catalog_file) => {
                let spinner = Progress::spinner("Seeding company catalog");
                let seeds = flux_ingest::catalog::read_catalog_file(catalog_file)?;
                let seeded = db.seed_catalog(&seeds).await?;
                spinner.finish_ok("Company database writing operation completed.");
                seeded
            }
            None => 0,
        };

        // Stage 5: fold the sorted scan into ranked change sequences, then
        // join each against the catalog once and write the ranked report.
        let spinner = Progress::spinner("Ranking change sequences");
        let mut scan = db.scan_ordered().await?;
        let mut builder = SequenceBuilder::new();
        while let Some((sku, qty)) = scan.next().await? {
            builder.push(&sku, qty);
        }
        let ranked = rank_by_volatility(builder.finish());

        let mut catalog_joined: Vec<Option<CatalogInfo>> = Vec::with_capacity(ranked.len());
        let mut ranked_entries = Vec::with_capacity(ranked.len());
        let mut net_entries = Vec::with_capacity(ranked.len());
        for sequence in &ranked {
            let info = db.catalog_lookup(&sequence.sku).await?;
            ranked_entries.push(RankedEntry::from_sequence(sequence, info.as_ref()));
            net_entries.push(NetChangeEntry::from_sequence(
                sequence,
                info.as_ref(),
                ChangeFormula::NetDecreaseSum,
            ));
            catalog_joined.push(info);
        }
        reports::write_lines(&self.reports_dir.join(RANKED_CHANGES_FILE), &ranked_entries)?;
        spinner.finish_ok("Ranked changes file creation operation completed.");

        // Stage 6: net stock changes reuse the same join.
        let spinner = Progress::spinner("Writing net stock changes");
        reports::write_lines(&self.reports_dir.join(NET_STOCK_CHANGES_FILE), &net_entries)?;
        spinner.finish_ok("Net stock changes file creation operation completed.");

        // Stage 7: stable SKUs, each with the timestamp of its first stored
        // row. A stable SKU with no stored row (the NULL-SKU case) is skipped.
        let bar = Progress::bar(ranked.len() as u64, "Finding stable SKUs");
        let mut stable_entries = Vec::new();
        for (sequence, info) in ranked.iter().zip(catalog_joined.iter()) {
            bar.inc(1);
            if !is_stable(sequence) {
                continue;
            }
            if let Some(first_seen) = db.first_seen(&sequence.sku).await? {
                stable_entries.push(StableEntry::new(
                    sequence.sku.as_str(),
                    first_seen,
                    info.as_ref(),
                ));
            }
        }
        reports::write_lines(&self.reports_dir.join(STABLE_SKUS_FILE), &stable_entries)?;
        bar.finish_ok("Stable SKUs file creation operation completed.");

        let (stable, volatile) = split_stability(&ranked);
        Ok(PipelineSummary {
            events: events.len(),
            catalog_rows,
            sequences: ranked.len(),
            volatile_skus: volatile.len(),
            stable_skus: stable.len(),
            reports_dir: self.reports_dir.display().to_string(),
            finished_at: Utc::now(),
        })
    }
}
