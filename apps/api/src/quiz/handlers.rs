//! Axum route handlers for the survey and scoring flow.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::survey::{SurveyStatement, STATEMENTS};
use crate::errors::AppError;
use crate::quiz::result::QuizResult;
use crate::quiz::scoring::score;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SurveyResponse {
    pub statements: &'static [SurveyStatement],
    pub total: usize,
}

/// GET /api/v1/survey
pub async fn handle_get_survey() -> Json<SurveyResponse> {
    Json(SurveyResponse {
        statements: STATEMENTS,
        total: STATEMENTS.len(),
    })
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub statement_id: u16,
    pub rating: u8,
}

#[derive(Debug, Serialize)]
pub struct SurveyProgress {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

/// POST /api/v1/survey/answers
///
/// Records or overwrites one rating. Bad ids/ratings are caller bugs and
/// come back as 400, never silently absorbed.
pub async fn handle_record_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SurveyProgress>, AppError> {
    let mut session = state.session.write().await;
    session
        .collector
        .record_answer(request.statement_id, request.rating)?;

    Ok(Json(SurveyProgress {
        answered: session.collector.answered(),
        total: STATEMENTS.len(),
        complete: session.collector.is_complete(),
    }))
}

/// POST /api/v1/survey/reset
pub async fn handle_reset_survey(State(state): State<AppState>) -> StatusCode {
    state.session.write().await.collector.reset();
    StatusCode::NO_CONTENT
}

/// POST /api/v1/survey/submit
///
/// Scores whatever has been collected (skipped statements count as neutral),
/// applies the result to the profile, and persists best-effort. Scoring
/// itself cannot fail the request; the engine degrades to its fixed neutral
/// result instead.
pub async fn handle_submit_survey(
    State(state): State<AppState>,
) -> Result<Json<QuizResult>, AppError> {
    let (result, profile) = {
        let mut session = state.session.write().await;
        let result = score(session.collector.responses(), &state.catalog);
        session.profile.apply_quiz_result(result.clone());
        (result, session.profile.clone())
    };

    state.store.save(&profile).await;

    Ok(Json(result))
}

/// GET /api/v1/quiz/result
pub async fn handle_get_result(
    State(state): State<AppState>,
) -> Result<Json<QuizResult>, AppError> {
    let session = state.session.read().await;
    session
        .profile
        .quiz_result
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Quiz has not been completed yet".to_string()))
}
