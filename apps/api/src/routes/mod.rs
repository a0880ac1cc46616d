pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::guidance::handlers as guidance_handlers;
use crate::profile::handlers as profile_handlers;
use crate::quiz::handlers as quiz_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Survey + scoring
        .route("/api/v1/survey", get(quiz_handlers::handle_get_survey))
        .route(
            "/api/v1/survey/answers",
            post(quiz_handlers::handle_record_answer),
        )
        .route(
            "/api/v1/survey/reset",
            post(quiz_handlers::handle_reset_survey),
        )
        .route(
            "/api/v1/survey/submit",
            post(quiz_handlers::handle_submit_survey),
        )
        .route("/api/v1/quiz/result", get(quiz_handlers::handle_get_result))
        // Career library
        .route("/api/v1/careers", get(catalog_handlers::handle_list_careers))
        .route(
            "/api/v1/careers/:id",
            get(catalog_handlers::handle_get_career),
        )
        .route(
            "/api/v1/careers/:id/pathway",
            get(guidance_handlers::handle_pathway),
        )
        // Profile
        .route(
            "/api/v1/profile",
            get(profile_handlers::handle_get_profile)
                .patch(profile_handlers::handle_update_profile),
        )
        .route(
            "/api/v1/profile/skills",
            patch(profile_handlers::handle_update_skills),
        )
        .route(
            "/api/v1/profile/saved/:career_id",
            post(profile_handlers::handle_toggle_saved),
        )
        // Guidance
        .route("/api/v1/mentor/chat", post(guidance_handlers::handle_mentor_chat))
        .route("/api/v1/news", get(guidance_handlers::handle_news))
        .route(
            "/api/v1/scholarships",
            get(guidance_handlers::handle_scholarships),
        )
        .route(
            "/api/v1/scholarships/live",
            get(guidance_handlers::handle_live_scholarships),
        )
        .route(
            "/api/v1/projects/ideas",
            post(guidance_handlers::handle_project_ideas),
        )
        .with_state(state)
}
