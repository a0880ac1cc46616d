//! Portfolio project idea generation for the skill tracker.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai_client::prompts::{JSON_ONLY_SYSTEM, PROJECTS_PROMPT_TEMPLATE};
use crate::ai_client::GeminiClient;
use crate::guidance::fallbacks::fallback_projects;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub skills_gained: Vec<String>,
}

/// Generates three project ideas for an interest and grade, substituting a
/// single generic starter project if the collaborator fails.
pub async fn generate_project_ideas(
    interest: &str,
    grade: &str,
    ai: &GeminiClient,
) -> Vec<ProjectIdea> {
    let prompt = PROJECTS_PROMPT_TEMPLATE
        .replace("{interest}", interest)
        .replace("{grade}", grade);

    match ai.call_json::<Vec<ProjectIdea>>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(ideas) if !ideas.is_empty() => ideas,
        Ok(_) => {
            warn!("Project generation returned an empty list, using fallback");
            fallback_projects(interest)
        }
        Err(e) => {
            warn!("Project generation failed, using fallback: {e}");
            fallback_projects(interest)
        }
    }
}
