use anyhow::Result;
use chrono::NaiveDate;

use super::connection::{get_connection, DbPool};
use super::{matches, ratings};
use crate::domain::{MatchRecord, MatchStore, RatingSnapshot};

/// `MatchStore` backed by the SQLite pool
#[derive(Clone)]
pub struct SqliteMatchStore {
    pool: DbPool,
}

impl SqliteMatchStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Any stored match or rating snapshot, regardless of date
    pub fn has_player(&self, player: &str) -> Result<bool> {
        let conn = get_connection(&self.pool)?;
        Ok(matches::has_player(&conn, player)? || ratings::has_snapshot(&conn, player)?)
    }
}

impl MatchStore for SqliteMatchStore {
    fn fetch_matches(
        &self,
        subject: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MatchRecord>> {
        let conn = get_connection(&self.pool)?;
        matches::list_for_player_between(&conn, subject, start, end)
    }

    fn fetch_rating_snapshots(&self, subject: &str) -> Result<Vec<RatingSnapshot>> {
        let conn = get_connection(&self.pool)?;
        ratings::list_by_player(&conn, subject)
    }
}
