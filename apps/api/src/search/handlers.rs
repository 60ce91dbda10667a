//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::geo::handlers::validate_coordinate;
use crate::models::job::JobPosting;
use crate::search::{MatchedPosting, SearchCriteria};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total: usize,
    pub radius_km: Option<f64>,
    pub results: Vec<MatchedPosting>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.board.list())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .board
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/v1/jobs
///
/// Inserts or replaces a posting. A blank id is assigned by the board.
pub async fn handle_upsert_job(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    if posting.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if let Some(coord) = &posting.coordinate {
        validate_coordinate("coordinate", coord)?;
    }
    let stored = state.board.upsert(posting);
    Ok((StatusCode::CREATED, Json(stored)))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.board.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Job {id} not found")))
    }
}

/// POST /api/v1/jobs/search
///
/// Runs text → city → radius filtering over the current board snapshot.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(criteria): Json<SearchCriteria>,
) -> Result<Json<SearchResponse>, AppError> {
    if let Some(reference) = &criteria.reference {
        validate_coordinate("reference", reference)?;
    }
    if let Some(radius) = criteria.radius_km {
        validate_radius(radius)?;
    }

    let results = state.board.search(&criteria);
    let radius_km = criteria
        .reference
        .map(|_| criteria.radius_km.unwrap_or(state.board.default_radius_km()));

    Ok(Json(SearchResponse {
        total: results.len(),
        radius_km,
        results,
    }))
}

pub fn validate_radius(radius_km: f64) -> Result<(), AppError> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(AppError::Validation(format!(
            "radius_km must be a non-negative number, got {radius_km}"
        )));
    }
    Ok(())
}
