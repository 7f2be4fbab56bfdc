use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog entry, as produced by the offline catalog build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    /// Lookup key for similarity queries
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Remaining descriptive metadata, carried through unchanged for display
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl BookRecord {
    /// Creates a record with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            image_url: None,
            metadata: Map::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// A ranked entry of the precomputed "popular books" list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopularityEntry {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Number of ratings the book received
    pub num_ratings: u64,
    /// Mean rating across those ratings
    pub avg_rating: f32,
}
