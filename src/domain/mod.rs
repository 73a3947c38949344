pub mod models;
pub mod scraped;
pub mod store;

pub use models::{MatchRecord, PlayerId, RatingSnapshot, RatingValue, SetScore, MAX_SETS};
pub use scraped::{ScrapeBatch, ScrapedMatch, ScrapedRating};
pub use store::MatchStore;
