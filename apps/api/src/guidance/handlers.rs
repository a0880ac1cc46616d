//! Axum route handlers for the guidance features.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::ai_client::ChatTurn;
use crate::errors::AppError;
use crate::guidance::mentor::{generate_mentor_reply, ChatMessage};
use crate::guidance::news::{fetch_news, NewsDigest};
use crate::guidance::pathway::{generate_pathway, PathwayPlan};
use crate::guidance::projects::{generate_project_ideas, ProjectIdea};
use crate::guidance::scholarships::{discover_live, reference_scholarships, Scholarship};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

/// POST /api/v1/mentor/chat
///
/// The transcript is client-held; each request replays prior turns and the
/// reply comes back as a ready-to-append transcript message.
pub async fn handle_mentor_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::InvalidInput("message cannot be empty".to_string()));
    }

    let reply = generate_mentor_reply(&request.history, &request.message, &state.ai).await;
    Ok(Json(ChatMessage::model_reply(reply)))
}

/// GET /api/v1/careers/:id/pathway
///
/// Personalised roadmap for a catalog career; falls back to the generic plan
/// if generation fails.
pub async fn handle_pathway(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
) -> Result<Json<PathwayPlan>, AppError> {
    let career = state
        .catalog
        .get(&career_id)
        .ok_or_else(|| AppError::NotFound(format!("Career '{career_id}' not found")))?;

    let profile = state.session.read().await.profile.clone();
    let plan = generate_pathway(&career.title, &profile, &state.ai).await;
    Ok(Json(plan))
}

/// GET /api/v1/news
pub async fn handle_news(State(state): State<AppState>) -> Json<NewsDigest> {
    Json(fetch_news(&state.ai).await)
}

/// GET /api/v1/scholarships
pub async fn handle_scholarships() -> Json<Vec<Scholarship>> {
    Json(reference_scholarships())
}

/// GET /api/v1/scholarships/live
pub async fn handle_live_scholarships(State(state): State<AppState>) -> Json<Vec<Scholarship>> {
    Json(discover_live(&state.ai).await)
}

#[derive(Debug, Deserialize)]
pub struct ProjectIdeasRequest {
    pub interest: String,
}

/// POST /api/v1/projects/ideas
///
/// Grade comes from the session profile so ideas match the student's level.
pub async fn handle_project_ideas(
    State(state): State<AppState>,
    Json(request): Json<ProjectIdeasRequest>,
) -> Result<Json<Vec<ProjectIdea>>, AppError> {
    if request.interest.trim().is_empty() {
        return Err(AppError::InvalidInput("interest cannot be empty".to_string()));
    }

    let grade = state.session.read().await.profile.grade.clone();
    let ideas = generate_project_ideas(&request.interest, &grade, &state.ai).await;
    Ok(Json(ideas))
}
