use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{RatingSnapshot, RatingValue};
use crate::stats::SubjectView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    pub date: NaiveDate,
    pub rating: RatingValue,
}

/// Match-time ratings followed by standalone snapshots, sorted by date.
/// Same-day points keep that order; duplicate dates are not collapsed.
pub fn merge_rating_series(views: &[SubjectView], snapshots: &[RatingSnapshot]) -> Vec<RatingPoint> {
    let mut series: Vec<RatingPoint> = views
        .iter()
        .map(|v| RatingPoint { date: v.match_date, rating: v.subject_rating })
        .chain(snapshots.iter().map(|s| RatingPoint { date: s.date, rating: s.rating }))
        .collect();

    series.sort_by_key(|p| p.date);
    series
}

/// Lowest rating value is the best; earliest point wins a tie
pub fn best_rating(series: &[RatingPoint]) -> Option<&RatingPoint> {
    series.iter().fold(None, |best, point| match best {
        Some(current) if current.rating <= point.rating => Some(current),
        _ => Some(point),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MatchRecord, SetScore};
    use crate::stats::enrich;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, month, day).unwrap()
    }

    fn record(on: NaiveDate, rating_a: f64) -> MatchRecord {
        MatchRecord {
            player_a: "Anna".to_string(),
            player_b: "Bea".to_string(),
            rating_a,
            rating_b: 7.0,
            set_scores: [Some(SetScore::new(6, 3)), Some(SetScore::new(6, 3)), None],
            winner: "Anna".to_string(),
            match_date: on,
        }
    }

    fn snapshot(on: NaiveDate, rating: f64) -> RatingSnapshot {
        RatingSnapshot { player_id: "Anna".to_string(), date: on, rating }
    }

    #[test]
    fn test_merge_sorts_matches_and_snapshots_together() {
        let views = enrich(&[record(date(5, 1), 6.8), record(date(2, 1), 7.1)], "Anna").unwrap();
        let snapshots = [snapshot(date(9, 1), 6.5), snapshot(date(3, 1), 7.0)];

        let series = merge_rating_series(&views, &snapshots);
        let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2, 1), date(3, 1), date(5, 1), date(9, 1)]);
        assert_eq!(series[2].rating, 6.8);
    }

    #[test]
    fn test_merge_keeps_duplicate_dates() {
        let views = enrich(&[record(date(4, 4), 6.9)], "Anna").unwrap();
        let series = merge_rating_series(&views, &[snapshot(date(4, 4), 6.7)]);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].rating, 6.9);
        assert_eq!(series[1].rating, 6.7);
    }

    #[test]
    fn test_best_rating_is_minimum() {
        let series = vec![
            RatingPoint { date: date(1, 1), rating: 7.2 },
            RatingPoint { date: date(2, 1), rating: 6.4 },
            RatingPoint { date: date(3, 1), rating: 6.9 },
            RatingPoint { date: date(4, 1), rating: 6.4 },
        ];
        let best = best_rating(&series).unwrap();
        assert_eq!(best.rating, 6.4);
        assert_eq!(best.date, date(2, 1));
        assert!(best_rating(&[]).is_none());
    }
}
