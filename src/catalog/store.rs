use chrono::{DateTime, Utc};
use std::collections::HashSet;

use super::{ArtifactSource, FeatureMatrix};
use crate::{
    error::{AppError, AppResult},
    models::{BookRecord, PopularityEntry},
};

/// Immutable catalog, feature matrix and popularity list
///
/// Built once at startup and shared read-only between requests. Row `i` of
/// the feature matrix always describes `books()[i]`.
#[derive(Debug)]
pub struct CatalogStore {
    books: Vec<BookRecord>,
    features: FeatureMatrix,
    popular: Vec<PopularityEntry>,
    loaded_at: DateTime<Utc>,
}

impl CatalogStore {
    /// Creates a store, validating that the matrix is aligned with the books
    pub fn new(
        books: Vec<BookRecord>,
        features: Vec<Vec<f32>>,
        popular: Vec<PopularityEntry>,
    ) -> AppResult<Self> {
        if books.len() != features.len() {
            return Err(AppError::Artifact(format!(
                "{} books but {} feature rows",
                books.len(),
                features.len()
            )));
        }
        let features = FeatureMatrix::new(features)?;

        let mut seen = HashSet::new();
        let duplicates = books
            .iter()
            .filter(|book| !seen.insert(book.title.as_str()))
            .count();
        if duplicates > 0 {
            // Lookups resolve to the first occurrence; later rows stay reachable
            // only as candidates.
            tracing::warn!(duplicates, "Catalog contains duplicate titles");
        }

        Ok(Self {
            books,
            features,
            popular,
            loaded_at: Utc::now(),
        })
    }

    /// Loads and validates both artifacts from the given source
    pub async fn load(source: &dyn ArtifactSource) -> AppResult<Self> {
        let artifact = source.load_catalog().await?;
        let popular = source.load_popular().await?;

        let store = Self::new(artifact.books, artifact.features, popular)?;

        tracing::info!(
            source = source.name(),
            books = store.books.len(),
            dimension = store.features.dimension(),
            popular = store.popular.len(),
            "Catalog loaded"
        );

        Ok(store)
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    pub fn popular(&self) -> &[PopularityEntry] {
        &self.popular
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First catalog row whose title equals `title` exactly
    pub fn resolve_index(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|book| book.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogArtifact, MockArtifactSource};

    fn books(titles: &[&str]) -> Vec<BookRecord> {
        titles.iter().map(|t| BookRecord::new(*t)).collect()
    }

    #[test]
    fn test_resolve_index_first_match_wins() {
        let store = CatalogStore::new(
            books(&["Dune", "Emma", "Dune"]),
            vec![vec![1.0], vec![0.5], vec![0.2]],
            vec![],
        )
        .unwrap();

        assert_eq!(store.resolve_index("Dune"), Some(0));
        assert_eq!(store.resolve_index("Emma"), Some(1));
        assert_eq!(store.resolve_index("dune"), None);
        assert_eq!(store.resolve_index("Missing"), None);
    }

    #[test]
    fn test_rejects_misaligned_matrix() {
        let err = CatalogStore::new(books(&["Dune", "Emma"]), vec![vec![1.0]], vec![]).unwrap_err();
        assert!(matches!(err, AppError::Artifact(_)));
    }

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::new(vec![], vec![], vec![]).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.resolve_index("Dune"), None);
    }

    #[test]
    fn test_load_from_source() {
        let mut source = MockArtifactSource::new();
        source.expect_load_catalog().returning(|| {
            Ok(CatalogArtifact {
                books: vec![BookRecord::new("Dune"), BookRecord::new("Emma")],
                features: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            })
        });
        source.expect_load_popular().returning(|| {
            Ok(vec![PopularityEntry {
                title: "Dune".to_string(),
                author: None,
                image_url: None,
                num_ratings: 42,
                avg_rating: 9.1,
            }])
        });
        source.expect_name().return_const("mock");

        let store = tokio_test::block_on(CatalogStore::load(&source)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.features().dimension(), 2);
        assert_eq!(store.popular()[0].num_ratings, 42);
    }

    #[test]
    fn test_load_propagates_source_failure() {
        let mut source = MockArtifactSource::new();
        source
            .expect_load_catalog()
            .returning(|| Err(AppError::Artifact("truncated".to_string())));
        source.expect_load_popular().never();

        let result = tokio_test::block_on(CatalogStore::load(&source));
        assert!(matches!(result, Err(AppError::Artifact(_))));
    }

    #[test]
    fn test_load_rejects_invalid_artifact() {
        let mut source = MockArtifactSource::new();
        source.expect_load_catalog().returning(|| {
            Ok(CatalogArtifact {
                books: vec![BookRecord::new("Dune")],
                features: vec![],
            })
        });
        source.expect_load_popular().returning(|| Ok(vec![]));
        source.expect_name().return_const("mock");

        let result = tokio_test::block_on(CatalogStore::load(&source));
        assert!(matches!(result, Err(AppError::Artifact(_))));
    }
}
