//! Axum route handlers for the career library.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::careers::CareerRecord;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerFilter {
    /// Case-insensitive industry name, e.g. "technology".
    pub industry: Option<String>,
    /// Case-insensitive substring match on title and description.
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<CareerRecord>,
    pub total: usize,
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(filter): Query<CareerFilter>,
) -> Json<CareerListResponse> {
    let needle = filter.q.as_deref().map(str::to_lowercase);

    let careers: Vec<CareerRecord> = state
        .catalog
        .all()
        .iter()
        .filter(|c| {
            filter
                .industry
                .as_deref()
                .map_or(true, |i| c.industry.to_string().eq_ignore_ascii_case(i))
        })
        .filter(|c| {
            needle.as_deref().map_or(true, |q| {
                c.title.to_lowercase().contains(q) || c.description.to_lowercase().contains(q)
            })
        })
        .cloned()
        .collect();

    let total = careers.len();
    Json(CareerListResponse { careers, total })
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
) -> Result<Json<CareerRecord>, AppError> {
    state
        .catalog
        .get(&career_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career '{career_id}' not found")))
}
