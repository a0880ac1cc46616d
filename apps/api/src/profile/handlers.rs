//! Axum route handlers for the user profile and saved-career list.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::quiz::result::SkillProfile;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.session.read().await.profile.clone())
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub interests: Option<Vec<String>>,
}

/// PATCH /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>, AppError> {
    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput("name cannot be empty".to_string()));
        }
    }

    let profile = {
        let mut session = state.session.write().await;
        if let Some(name) = update.name {
            session.profile.name = name.trim().to_string();
        }
        if let Some(grade) = update.grade {
            session.profile.grade = grade;
        }
        if let Some(interests) = update.interests {
            session.profile.interests = interests;
        }
        session.profile.clone()
    };

    state.store.save(&profile).await;
    Ok(Json(profile))
}

/// PATCH /api/v1/profile/skills
///
/// Skill tracker updates — the student's self-reported progress overwrites
/// the tracked values (the quiz result itself stays immutable).
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Json(skills): Json<SkillProfile>,
) -> Json<UserProfile> {
    let profile = {
        let mut session = state.session.write().await;
        session.profile.skill_progress = skills;
        session.profile.clone()
    };

    state.store.save(&profile).await;
    Json(profile)
}

#[derive(Debug, Serialize)]
pub struct SavedCareersResponse {
    pub saved_careers: Vec<String>,
    pub saved: bool,
}

/// POST /api/v1/profile/saved/:career_id
///
/// Toggle semantics: present → removed, absent → appended with FIFO
/// eviction. Any id is accepted; catalog membership is not checked here.
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
) -> Json<SavedCareersResponse> {
    let (profile, saved) = {
        let mut session = state.session.write().await;
        session.profile.saved_careers.toggle(&career_id);
        let saved = session.profile.saved_careers.contains(&career_id);
        (session.profile.clone(), saved)
    };

    state.store.save(&profile).await;

    Json(SavedCareersResponse {
        saved_careers: profile.saved_careers.ids().to_vec(),
        saved,
    })
}
