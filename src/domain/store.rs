use anyhow::Result;
use chrono::NaiveDate;

use super::models::{MatchRecord, RatingSnapshot};

/// Read side of the match/rating store that reports are computed from
pub trait MatchStore {
    /// Matches with `subject` on either side, `match_date` within `[start, end]` inclusive
    fn fetch_matches(
        &self,
        subject: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MatchRecord>>;

    fn fetch_rating_snapshots(&self, subject: &str) -> Result<Vec<RatingSnapshot>>;
}
