use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

pub type PlayerId = String;
pub type RatingValue = f64;

/// Best of three sets
pub const MAX_SETS: usize = 3;

/// Games won in one set, in the order the source lists the players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub games_a: u8,
    pub games_b: u8,
}

impl SetScore {
    pub fn new(games_a: u8, games_b: u8) -> Self {
        Self { games_a, games_b }
    }
}

/// One completed singles match as stored
///
/// Ratings follow the federation convention: a lower value is a stronger player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    pub rating_a: RatingValue,
    pub rating_b: RatingValue,
    /// Unplayed sets are `None`
    pub set_scores: [Option<SetScore>; MAX_SETS],
    pub winner: PlayerId,
    pub match_date: NaiveDate,
}

impl MatchRecord {
    pub fn involves(&self, player: &str) -> bool {
        self.player_a == player || self.player_b == player
    }

    /// Checks the winner and set layout invariants
    pub fn validate(&self) -> Result<(), RecordError> {
        if !self.involves(&self.winner) {
            return Err(RecordError::UnknownWinner {
                winner: self.winner.clone(),
                player_a: self.player_a.clone(),
                player_b: self.player_b.clone(),
            });
        }

        let mut seen_unplayed = false;
        for (idx, set) in self.set_scores.iter().enumerate() {
            match set {
                None => seen_unplayed = true,
                Some(_) if seen_unplayed => return Err(RecordError::SetGap(idx + 1)),
                Some(_) => {}
            }
        }

        Ok(())
    }
}

/// Point-in-time rating reading not tied to a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub player_id: PlayerId,
    pub date: NaiveDate,
    pub rating: RatingValue,
}
