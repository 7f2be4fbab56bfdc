use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{BookRecord, PopularityEntry, Recommendation};
use crate::services::{find_title_by_substring, list_catalog_titles, list_popular, Recommender};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// Exact catalog title the query resolved to
    pub title: Option<String>,
}

/// Single-seed request; an explicit `title` takes precedence over `query`
#[derive(Debug, Default, Deserialize)]
pub struct SimilarRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SimilarResponse {
    pub selected_title: Option<String>,
    pub search_query: Option<String>,
    pub recommendations: Vec<RecommendedBook>,
}

#[derive(Debug, Deserialize)]
pub struct PersonalRequest {
    #[serde(default)]
    pub titles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonalResponse {
    pub selected_titles: Vec<String>,
    pub recommendations: Vec<RecommendedBook>,
}

#[derive(Debug, Serialize)]
pub struct RecommendedBook {
    pub score: f32,
    #[serde(flatten)]
    pub book: BookRecord,
}

impl From<Recommendation<'_>> for RecommendedBook {
    fn from(recommendation: Recommendation<'_>) -> Self {
        Self {
            score: recommendation.score,
            book: recommendation.book.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "books": state.store.len(),
        "loaded_at": state.store.loaded_at(),
    }))
}

/// Precomputed popular books
pub async fn popular_books(State(state): State<AppState>) -> Json<Vec<PopularityEntry>> {
    Json(list_popular(&state.store).to_vec())
}

/// Distinct catalog titles for selection lists
pub async fn catalog_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        list_catalog_titles(&state.store)
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// Resolve free text to an exact catalog title
pub async fn search_title(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let title = find_title_by_substring(&state.store, &params.q).map(str::to_string);
    Json(SearchResponse {
        query: params.q,
        title,
    })
}

/// Books similar to one selected (or searched) title
///
/// An unknown title is not an error here: the response simply carries no
/// recommendations.
pub async fn recommend_similar(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SimilarRequest>,
) -> AppResult<Json<SimilarResponse>> {
    let search_query = non_empty(request.query);

    let selected_title = match (non_empty(request.title), search_query.as_deref()) {
        (Some(title), _) => Some(title),
        (None, Some(query)) => find_title_by_substring(&state.store, query).map(str::to_string),
        (None, None) => {
            return Err(AppError::InvalidInput(
                "Either 'title' or 'query' is required".to_string(),
            ))
        }
    };

    tracing::info!(
        request_id = %request_id,
        selected_title = selected_title.as_deref().unwrap_or(""),
        "Processing similar-books request"
    );

    let recommendations = match selected_title.as_deref() {
        Some(title) => {
            let exclude: HashSet<String> = request.exclude.into_iter().collect();
            match Recommender::new(&state.store).recommend_similar(
                title,
                &exclude,
                state.similar_top_k,
            ) {
                Ok(found) => found.into_iter().map(RecommendedBook::from).collect(),
                Err(AppError::NotFound(msg)) => {
                    tracing::info!(request_id = %request_id, %msg, "Seed title not in catalog");
                    Vec::new()
                }
                Err(e) => return Err(e),
            }
        }
        None => Vec::new(),
    };

    Ok(Json(SimilarResponse {
        selected_title,
        search_query,
        recommendations,
    }))
}

/// Books recommended for a set of selected titles
pub async fn recommend_personal(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<PersonalRequest>,
) -> AppResult<Json<PersonalResponse>> {
    tracing::info!(
        request_id = %request_id,
        seed_count = request.titles.len(),
        "Processing personal recommendations request"
    );

    let recommendations = Recommender::new(&state.store)
        .recommend_for_multiple(&request.titles, state.personal_top_k)?
        .into_iter()
        .map(RecommendedBook::from)
        .collect::<Vec<_>>();

    tracing::info!(
        request_id = %request_id,
        recommendation_count = recommendations.len(),
        "Personal recommendations completed"
    );

    Ok(Json(PersonalResponse {
        selected_titles: request.titles,
        recommendations,
    }))
}
