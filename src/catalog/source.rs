//! Artifact sources for the catalog store
//!
//! The catalog, its feature matrix and the popularity list are produced by an
//! offline pipeline. A source only knows how to hand them over; validation is
//! the store's job.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    error::AppResult,
    models::{BookRecord, PopularityEntry},
};

/// On-disk shape of the catalog artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogArtifact {
    pub books: Vec<BookRecord>,
    /// One feature vector per book, same order as `books`
    pub features: Vec<Vec<f32>>,
}

/// Trait for catalog artifact providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Load the books together with their feature vectors
    async fn load_catalog(&self) -> AppResult<CatalogArtifact>;

    /// Load the precomputed popularity list
    async fn load_popular(&self) -> AppResult<Vec<PopularityEntry>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Reads both artifacts as JSON files
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    catalog_path: PathBuf,
    popular_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(catalog_path: impl Into<PathBuf>, popular_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            popular_path: popular_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl ArtifactSource for JsonFileSource {
    async fn load_catalog(&self) -> AppResult<CatalogArtifact> {
        tracing::debug!(path = %self.catalog_path.display(), "Reading catalog artifact");
        let bytes = tokio::fs::read(&self.catalog_path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn load_popular(&self) -> AppResult<Vec<PopularityEntry>> {
        tracing::debug!(path = %self.popular_path.display(), "Reading popularity artifact");
        let bytes = tokio::fs::read(&self.popular_path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
