use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::database::{self, DbPool};
use crate::domain::{MatchRecord, RatingSnapshot, ScrapeBatch};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub matches_inserted: usize,
    pub matches_skipped: usize,
    pub ratings_inserted: usize,
    pub ratings_skipped: usize,
}

/// Loads scraper output into the match store
pub struct ImportService {
    pool: DbPool,
}

impl ImportService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn run(&self, batch_path: &Path) -> Result<ImportSummary> {
        info!("=== Starting Import ===\n");

        // Step 1: Read the scraped batch
        let batch = self.load_batch(batch_path)?;
        info!(
            "  → Read {} matches and {} ratings from {}\n",
            batch.matches.len(),
            batch.current_ratings.len(),
            batch_path.display()
        );

        // Step 2: Store it
        let summary = self.import_batch(&batch)?;
        info!(
            "  → Inserted {} matches ({} skipped), {} ratings ({} skipped)\n",
            summary.matches_inserted,
            summary.matches_skipped,
            summary.ratings_inserted,
            summary.ratings_skipped
        );

        info!("=== Import Complete ===");
        Ok(summary)
    }

    fn load_batch(&self, path: &Path) -> Result<ScrapeBatch> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse scrape batch {}", path.display()))
    }

    /// Invalid rows are logged and skipped; the valid rest goes in as one transaction
    pub fn import_batch(&self, batch: &ScrapeBatch) -> Result<ImportSummary> {
        let (records, matches_skipped) = self.convert_matches(batch);
        let (snapshots, ratings_skipped) = self.convert_ratings(batch);

        let mut conn = database::get_connection(&self.pool)?;
        database::setup::ensure_schema(&conn)?;

        let tx = conn.transaction().context("Failed to start import transaction")?;
        for record in &records {
            database::matches::insert_match(&tx, record)?;
        }
        for snapshot in &snapshots {
            database::ratings::insert_snapshot(&tx, snapshot)?;
        }
        tx.commit().context("Failed to commit import")?;

        Ok(ImportSummary {
            matches_inserted: records.len(),
            matches_skipped,
            ratings_inserted: snapshots.len(),
            ratings_skipped,
        })
    }

    fn convert_matches(&self, batch: &ScrapeBatch) -> (Vec<MatchRecord>, usize) {
        let mut records = Vec::with_capacity(batch.matches.len());
        let mut skipped = 0;

        for (idx, scraped) in batch.matches.iter().enumerate() {
            match scraped.to_record() {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("  Skipping match #{} ({} vs {}): {}", idx + 1, scraped.player1, scraped.player2, e);
                    skipped += 1;
                }
            }
        }

        (records, skipped)
    }

    fn convert_ratings(&self, batch: &ScrapeBatch) -> (Vec<RatingSnapshot>, usize) {
        let mut snapshots = Vec::with_capacity(batch.current_ratings.len());
        let mut skipped = 0;

        for scraped in &batch.current_ratings {
            match scraped.to_snapshot() {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => {
                    warn!("  Skipping rating for {}: {}", scraped.name, e);
                    skipped += 1;
                }
            }
        }

        (snapshots, skipped)
    }
}
