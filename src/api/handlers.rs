use std::collections::HashSet;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Movie, MovieId};
use crate::services::{catalog, recommendations, snapshot};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub selected: Vec<MovieId>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub movie_count: usize,
    pub user_count: usize,
    pub fetched_at: DateTime<Utc>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Browsing list: the full catalog sorted by title
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let snapshot = state.snapshot.read().await;
    Json(catalog::normalize_catalog(&snapshot.catalog))
}

/// Ranked recommendations for the selected movies
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<Movie>>> {
    if request.selected.is_empty() {
        return Err(AppError::InvalidInput("no movies selected".to_string()));
    }

    let selection: HashSet<MovieId> = request.selected.into_iter().collect();

    let snapshot = state.snapshot.read().await;
    let picks = recommendations::recommend(&selection, &snapshot.profiles, &snapshot.catalog);

    tracing::debug!(
        selected = selection.len(),
        recommended = picks.len(),
        "Computed recommendations"
    );

    Ok(Json(picks))
}

/// Re-fetches catalog and corpus from the data source and swaps them in
pub async fn refresh(State(state): State<AppState>) -> AppResult<Json<RefreshResponse>> {
    let fresh = snapshot::load_snapshot(state.provider.as_ref()).await?;

    let response = RefreshResponse {
        movie_count: fresh.catalog.len(),
        user_count: fresh.profiles.len(),
        fetched_at: fresh.fetched_at,
    };

    // The write lock is only held for the swap itself.
    *state.snapshot.write().await = fresh;

    Ok(Json(response))
}
