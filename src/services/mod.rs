pub mod popular;
pub mod recommendations;
pub mod title_search;

pub use popular::list_popular;
pub use recommendations::Recommender;
pub use title_search::{find_title_by_substring, list_catalog_titles};
