use std::cmp::Ordering;
use std::collections::HashSet;

use crate::{
    catalog::CatalogStore,
    error::{AppError, AppResult},
    models::Recommendation,
};

/// Content-similarity recommendations over a loaded catalog
///
/// Scores are cosine similarities between feature rows. Every ranking is
/// ordered by score descending with ties broken by catalog row order, so the
/// same query always yields the same result.
pub struct Recommender<'a> {
    store: &'a CatalogStore,
}

impl<'a> Recommender<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Recommends books similar to a single seed title
    ///
    /// Takes the `top_k + 1` best rows and drops the first of them, which is
    /// the seed's own self-match unless an earlier row ties with it. Rows
    /// titled like the seed are then removed as well, so the result can hold
    /// fewer than `top_k` books. Titles in `exclude` are removed from the
    /// ranking beforehand; rows titled like the seed never are.
    ///
    /// Fails with `AppError::NotFound` if the seed is not in the catalog.
    pub fn recommend_similar(
        &self,
        seed_title: &str,
        exclude: &HashSet<String>,
        top_k: usize,
    ) -> AppResult<Vec<Recommendation<'a>>> {
        let scores = self.seed_scores(seed_title)?;
        let books = self.store.books();

        let recommendations = rank_descending(&scores)
            .into_iter()
            .filter(|&j| books[j].title == seed_title || !exclude.contains(books[j].title.as_str()))
            .take(top_k.saturating_add(1))
            .skip(1)
            .filter(|&j| books[j].title != seed_title)
            .map(|j| self.recommendation(j, scores[j]))
            .collect();

        Ok(recommendations)
    }

    /// Recommends books for a set of seed titles by summing their similarities
    ///
    /// Unknown seeds are skipped. Books whose title is one of the seeds never
    /// accumulate a score. Of the `top_k` best candidates only those with a
    /// positive accumulated score are returned.
    pub fn recommend_for_multiple<S: AsRef<str>>(
        &self,
        seed_titles: &[S],
        top_k: usize,
    ) -> AppResult<Vec<Recommendation<'a>>> {
        let seeds: HashSet<&str> = seed_titles.iter().map(|s| s.as_ref()).collect();
        let books = self.store.books();
        let mut accumulated = vec![0.0_f32; books.len()];
        let mut resolved = 0usize;

        for title in seed_titles.iter().map(|s| s.as_ref()) {
            let scores = match self.seed_scores(title) {
                Ok(scores) => scores,
                Err(AppError::NotFound(_)) => {
                    tracing::debug!(title, "Skipping unknown seed title");
                    continue;
                }
                Err(e) => return Err(e),
            };
            resolved += 1;

            for (j, score) in scores.into_iter().enumerate() {
                if !seeds.contains(books[j].title.as_str()) {
                    accumulated[j] += score;
                }
            }
        }

        tracing::debug!(
            seeds = seed_titles.len(),
            resolved,
            "Aggregated seed similarities"
        );

        Ok(rank_descending(&accumulated)
            .into_iter()
            .take(top_k)
            .filter(|&j| accumulated[j] > 0.0)
            .map(|j| self.recommendation(j, accumulated[j]))
            .collect())
    }

    fn seed_scores(&self, title: &str) -> AppResult<Vec<f32>> {
        let index = self
            .store
            .resolve_index(title)
            .ok_or_else(|| AppError::NotFound(format!("No book titled '{}'", title)))?;
        self.store.features().similarities(index)
    }

    fn recommendation(&self, index: usize, score: f32) -> Recommendation<'a> {
        Recommendation {
            score,
            book: &self.store.books()[index],
        }
    }
}

/// Row indices ordered by score descending, ties by index ascending
///
/// Scores compare by value, so `-0.0` and `0.0` tie. Feature values are
/// finite, so no score is NaN.
fn rank_descending(scores: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}
