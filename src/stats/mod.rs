pub mod engine;
pub mod perspective;
pub mod types;

pub use engine::compute_statistics;
pub use perspective::{enrich, SetGames, SubjectView};
pub use types::{OpponentRating, RatingGap, StatisticsReport};
