use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{MatchRecord, PlayerId, RatingValue, SetScore, MAX_SETS};
use crate::errors::StatsError;

/// Games in one set, seen from the subject's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetGames {
    pub subject: u8,
    pub opponent: u8,
}

impl SetGames {
    pub fn subject_won(&self) -> bool {
        self.subject > self.opponent
    }

    pub fn is(&self, subject: u8, opponent: u8) -> bool {
        self.subject == subject && self.opponent == opponent
    }
}

/// A match reprojected as "subject vs. opponent"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectView {
    pub match_date: NaiveDate,
    pub subject_rating: RatingValue,
    pub opponent_id: PlayerId,
    pub opponent_rating: RatingValue,
    pub sets: [Option<SetGames>; MAX_SETS],
    pub won: bool,
    pub went_three_sets: bool,
}

impl SubjectView {
    /// Set `index` (0-based) if it was played
    pub fn set(&self, index: usize) -> Option<SetGames> {
        self.sets.get(index).copied().flatten()
    }

    pub fn played_sets(&self) -> impl Iterator<Item = SetGames> + '_ {
        self.sets.iter().flatten().copied()
    }
}

/// Projects one set onto the subject's side
pub fn orient_set(score: Option<SetScore>, subject_is_a: bool) -> Option<SetGames> {
    score.map(|s| {
        if subject_is_a {
            SetGames { subject: s.games_a, opponent: s.games_b }
        } else {
            SetGames { subject: s.games_b, opponent: s.games_a }
        }
    })
}

/// Reorients every record around `subject`, keeping input order
pub fn enrich(records: &[MatchRecord], subject: &str) -> Result<Vec<SubjectView>, StatsError> {
    records.iter().map(|r| project(r, subject)).collect()
}

pub fn project(record: &MatchRecord, subject: &str) -> Result<SubjectView, StatsError> {
    if !record.involves(subject) {
        return Err(StatsError::PreconditionViolation {
            subject: subject.to_string(),
            player_a: record.player_a.clone(),
            player_b: record.player_b.clone(),
        });
    }

    let subject_is_a = record.player_a == subject;
    let (subject_rating, opponent_id, opponent_rating) = if subject_is_a {
        (record.rating_a, &record.player_b, record.rating_b)
    } else {
        (record.rating_b, &record.player_a, record.rating_a)
    };

    let sets = record.set_scores.map(|s| orient_set(s, subject_is_a));

    Ok(SubjectView {
        match_date: record.match_date,
        subject_rating,
        opponent_id: opponent_id.clone(),
        opponent_rating,
        went_three_sets: sets[2].is_some(),
        sets,
        won: record.winner == subject,
    })
}
