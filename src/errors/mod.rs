use thiserror::Error;

/// Raised by the perspective normalizer when a record cannot be viewed from the subject's side
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("{subject:?} did not play in {player_a:?} vs {player_b:?}")]
    PreconditionViolation {
        subject: String,
        player_a: String,
        player_b: String,
    },
}

/// Invalid raw match data, either scraped or stored
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("winner {winner:?} is neither {player_a:?} nor {player_b:?}")]
    UnknownWinner {
        winner: String,
        player_a: String,
        player_b: String,
    },

    #[error("a match has at most 3 sets, got {0}")]
    TooManySets(usize),

    #[error("set {0} was played after an unplayed set")]
    SetGap(usize),

    #[error("invalid rating: {0:?}")]
    InvalidRating(String),

    #[error("invalid match date: {0:?}")]
    InvalidDate(String),

    #[error("invalid set score: {0:?}")]
    InvalidSetScore(String),
}
