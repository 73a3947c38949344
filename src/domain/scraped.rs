use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::{MatchRecord, RatingSnapshot, SetScore, MAX_SETS};
use crate::errors::RecordError;

/// Everything one scraping run produced, handed over as a value
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScrapeBatch {
    #[serde(default)]
    pub matches: Vec<ScrapedMatch>,
    #[serde(default)]
    pub current_ratings: Vec<ScrapedRating>,
}

/// Raw match row as read from the rating website
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapedMatch {
    pub player1: String,
    pub player2: String,
    /// e.g. "(8,1234)"
    pub rating1: String,
    pub rating2: String,
    /// e.g. ["6-4", "6-7(5)", "10-8"]
    #[serde(default)]
    pub sets: Vec<String>,
    pub winner: String,
    /// dd-mm-yyyy or yyyy-mm-dd
    pub date: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapedRating {
    pub name: String,
    pub date: String,
    pub rating: String,
}

impl ScrapedMatch {
    pub fn to_record(&self) -> Result<MatchRecord, RecordError> {
        if self.sets.len() > MAX_SETS {
            return Err(RecordError::TooManySets(self.sets.len()));
        }

        let mut set_scores = [None; MAX_SETS];
        for (slot, raw) in set_scores.iter_mut().zip(&self.sets) {
            *slot = parse_set_score(raw)?;
        }

        let record = MatchRecord {
            player_a: self.player1.trim().to_string(),
            player_b: self.player2.trim().to_string(),
            rating_a: parse_rating(&self.rating1)?,
            rating_b: parse_rating(&self.rating2)?,
            set_scores,
            winner: self.winner.trim().to_string(),
            match_date: parse_match_date(&self.date)?,
        };
        record.validate()?;
        Ok(record)
    }
}

impl ScrapedRating {
    pub fn to_snapshot(&self) -> Result<RatingSnapshot, RecordError> {
        Ok(RatingSnapshot {
            player_id: self.name.trim().to_string(),
            date: parse_match_date(&self.date)?,
            rating: parse_rating(&self.rating)?,
        })
    }
}

/// Accepts "8,1234", "8.1234" and the parenthesised form shown next to player names
pub fn parse_rating(raw: &str) -> Result<f64, RecordError> {
    let cleaned = raw
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .replace(',', ".");

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| RecordError::InvalidRating(raw.to_string()))
}

pub fn parse_match_date(raw: &str) -> Result<NaiveDate, RecordError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d-%m-%Y") {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    Err(RecordError::InvalidDate(raw.to_string()))
}

/// An empty string or "-" marks an unplayed set; a trailing "(n)" tiebreak count is dropped
pub fn parse_set_score(raw: &str) -> Result<Option<SetScore>, RecordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(None);
    }

    let invalid = || RecordError::InvalidSetScore(raw.to_string());
    let without_tiebreak = trimmed.split('(').next().unwrap_or(trimmed);
    let (a, b) = without_tiebreak.split_once('-').ok_or_else(invalid)?;
    let games_a = a.trim().parse::<u8>().map_err(|_| invalid())?;
    let games_b = b.trim().parse::<u8>().map_err(|_| invalid())?;

    Ok(Some(SetScore::new(games_a, games_b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraped(sets: &[&str], winner: &str) -> ScrapedMatch {
        ScrapedMatch {
            player1: "Anna".to_string(),
            player2: " Bea ".to_string(),
            rating1: "(7,2500)".to_string(),
            rating2: "8.1".to_string(),
            sets: sets.iter().map(|s| s.to_string()).collect(),
            winner: winner.to_string(),
            date: "03-06-2022".to_string(),
        }
    }

    #[test]
    fn test_parse_rating_formats() {
        assert_eq!(parse_rating("(8,1234)").unwrap(), 8.1234);
        assert_eq!(parse_rating(" 6.5 ").unwrap(), 6.5);
        assert!(parse_rating("n/a").is_err());
        assert!(parse_rating("NaN").is_err());
    }

    #[test]
    fn test_parse_match_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2022, 6, 3).unwrap();
        assert_eq!(parse_match_date("03-06-2022").unwrap(), expected);
        assert_eq!(parse_match_date("2022-06-03").unwrap(), expected);
        assert!(parse_match_date("June 3rd").is_err());
    }

    #[test]
    fn test_parse_set_score() {
        assert_eq!(parse_set_score("6-4").unwrap(), Some(SetScore::new(6, 4)));
        assert_eq!(parse_set_score("6-7(5)").unwrap(), Some(SetScore::new(6, 7)));
        assert_eq!(parse_set_score("").unwrap(), None);
        assert_eq!(parse_set_score("-").unwrap(), None);
        assert!(parse_set_score("6:4").is_err());
    }

    #[test]
    fn test_to_record_trims_names_and_pads_sets() {
        let record = scraped(&["6-4", "6-2"], "Bea").to_record().unwrap();
        assert_eq!(record.player_b, "Bea");
        assert_eq!(record.winner, "Bea");
        assert_eq!(record.rating_a, 7.25);
        assert_eq!(record.set_scores[2], None);
    }

    #[test]
    fn test_to_record_rejects_four_sets() {
        let err = scraped(&["6-4", "4-6", "6-4", "6-0"], "Anna").to_record().unwrap_err();
        assert_eq!(err, RecordError::TooManySets(4));
    }

    #[test]
    fn test_to_record_rejects_unknown_winner() {
        let err = scraped(&["6-4", "6-4"], "Cleo").to_record().unwrap_err();
        assert!(matches!(err, RecordError::UnknownWinner { .. }));
    }
}
