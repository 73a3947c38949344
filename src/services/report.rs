use anyhow::{ensure, Result};
use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;

use crate::domain::MatchStore;
use crate::rating::{self, RatingPoint};
use crate::stats::{self, StatisticsReport};

/// Everything a formatter needs for one (player, date range) request
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub subject: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub match_count: usize,
    pub statistics: StatisticsReport,
    pub rating_series: Vec<RatingPoint>,
    pub best_rating: Option<RatingPoint>,
}

pub struct ReportService<'a, S: MatchStore> {
    store: &'a S,
}

impl<'a, S: MatchStore> ReportService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn build(&self, subject: &str, start: NaiveDate, end: NaiveDate) -> Result<PlayerReport> {
        ensure!(start <= end, "Start date must be before end date.");
        info!("Building report for {} ({} to {})", subject, start, end);

        // Step 1: Load matches and standalone ratings
        let records = self.store.fetch_matches(subject, start, end)?;
        let snapshots = self.store.fetch_rating_snapshots(subject)?;
        if records.is_empty() {
            warn!("No matches for {} between {} and {}", subject, start, end);
        }

        // Step 2: Reorient around the subject
        let views = stats::enrich(&records, subject)?;

        // Step 3: Metrics and rating trend
        let statistics = stats::compute_statistics(&views);
        let rating_series = rating::merge_rating_series(&views, &snapshots);
        let best_rating = rating::best_rating(&rating_series).cloned();

        info!(
            "  → {} matches, {} rating points for {}",
            views.len(),
            rating_series.len(),
            subject
        );

        Ok(PlayerReport {
            subject: subject.to_string(),
            start,
            end,
            match_count: views.len(),
            statistics,
            rating_series,
            best_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchRecord, RatingSnapshot, SetScore};
    use crate::errors::StatsError;

    struct FixedStore {
        matches: Vec<MatchRecord>,
        snapshots: Vec<RatingSnapshot>,
    }

    impl MatchStore for FixedStore {
        fn fetch_matches(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Vec<MatchRecord>> {
            Ok(self.matches.clone())
        }

        fn fetch_rating_snapshots(&self, _: &str) -> Result<Vec<RatingSnapshot>> {
            Ok(self.snapshots.clone())
        }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn record(opponent: &str, on: NaiveDate, subject_rating: f64, won: bool) -> MatchRecord {
        MatchRecord {
            player_a: opponent.to_string(),
            player_b: "Anna".to_string(),
            rating_a: 7.0,
            rating_b: subject_rating,
            set_scores: [Some(SetScore::new(3, 6)), Some(SetScore::new(4, 6)), None],
            winner: if won { "Anna" } else { opponent }.to_string(),
            match_date: on,
        }
    }

    #[test]
    fn test_build_combines_statistics_and_trend() {
        let store = FixedStore {
            matches: vec![record("Bea", date(3, 1), 6.8, true), record("Cleo", date(5, 1), 6.6, true)],
            snapshots: vec![RatingSnapshot {
                player_id: "Anna".to_string(),
                date: date(4, 1),
                rating: 6.5,
            }],
        };

        let report = ReportService::new(&store).build("Anna", date(1, 1), date(12, 31)).unwrap();

        assert_eq!(report.match_count, 2);
        assert_eq!(report.statistics.matches_won, 2);
        assert_eq!(report.statistics.longest_win_streak, 2);
        assert_eq!(report.rating_series.len(), 3);
        assert_eq!(report.best_rating.unwrap().date, date(4, 1));
    }

    #[test]
    fn test_build_rejects_inverted_range() {
        let store = FixedStore { matches: vec![], snapshots: vec![] };
        let err = ReportService::new(&store).build("Anna", date(6, 1), date(1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "Start date must be before end date.");
    }

    #[test]
    fn test_build_surfaces_foreign_records() {
        let mut foreign = record("Bea", date(3, 1), 6.8, true);
        foreign.player_b = "Dora".to_string();
        foreign.winner = "Dora".to_string();
        let store = FixedStore { matches: vec![foreign], snapshots: vec![] };

        let err = ReportService::new(&store).build("Anna", date(1, 1), date(12, 31)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StatsError>(),
            Some(StatsError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn test_empty_range_still_reports() {
        let store = FixedStore { matches: vec![], snapshots: vec![] };
        let report = ReportService::new(&store).build("Anna", date(1, 1), date(1, 31)).unwrap();

        assert_eq!(report.match_count, 0);
        assert_eq!(report.statistics.upset_win_pct, None);
        assert!(report.best_rating.is_none());
    }
}
