//! Job search: text, city and radius filters composed into one pipeline.

pub mod filter;
pub mod handlers;

pub use filter::{run_search, MatchedPosting, SearchCriteria, DEFAULT_RADIUS_KM};
