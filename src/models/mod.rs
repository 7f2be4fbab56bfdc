mod book;
mod recommendation;

pub use book::{BookRecord, PopularityEntry};
pub use recommendation::Recommendation;
