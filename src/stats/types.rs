use serde::Serialize;

use crate::domain::{PlayerId, RatingValue};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpponentRating {
    pub opponent: PlayerId,
    pub rating: RatingValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingGap {
    pub opponent: PlayerId,
    pub rating_diff: RatingValue,
}

/// Every metric derived from one subject's matches
///
/// Serializes to a flat name -> value map; undefined metrics become `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub matches_won: u32,
    pub matches_lost: u32,
    pub three_set_won: u32,
    pub three_set_lost: u32,
    pub longest_win_streak: u32,
    pub tiebreaks_won: u32,
    pub tiebreaks_lost: u32,
    pub comebacks: u32,
    pub comeback_rate: f64,
    pub conversion_count: u32,
    pub conversion_rate: f64,

    pub set_win_pct: f64,
    pub game_win_pct: f64,
    pub upset_win_pct: Option<f64>,
    pub favoured_win_pct: Option<f64>,
    /// (straight-set wins, three-set wins)
    pub straight_vs_three_ratio: (u32, u32),
    pub close_set_won: u32,
    pub close_set_lost: u32,
    pub bagels_won: u32,
    pub bread_won: u32,
    pub bagels_lost: u32,
    pub bread_lost: u32,
    pub set1_win_pct: Option<f64>,
    pub set2_win_pct: Option<f64>,
    pub set3_win_pct: Option<f64>,

    pub best_beaten: Option<OpponentRating>,
    pub worst_lost_to: Option<OpponentRating>,
    pub avg_rating_beaten: Option<f64>,
    pub avg_rating_lost_to: Option<f64>,
    pub biggest_upset_win: Option<RatingGap>,
    pub biggest_bad_beat_loss: Option<RatingGap>,
}

impl StatisticsReport {
    pub fn matches_played(&self) -> u32 {
        self.matches_won + self.matches_lost
    }

    pub fn set_win_pct_by_index(&self) -> [Option<f64>; 3] {
        [self.set1_win_pct, self.set2_win_pct, self.set3_win_pct]
    }
}
