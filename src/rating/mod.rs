pub mod trend;

pub use trend::{best_rating, merge_rating_series, RatingPoint};
