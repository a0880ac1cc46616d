//! Pathway generation — a structured, personalised roadmap from the
//! student's current grade to a target career.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai_client::prompts::{JSON_ONLY_SYSTEM, PATHWAY_PROMPT_TEMPLATE};
use crate::ai_client::GeminiClient;
use crate::guidance::fallbacks::fallback_pathway;
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// The educational stage, e.g. "Class 11-12", "Undergraduate/Diploma".
    pub stage: String,
    /// Concrete actions, subjects to pick, or exams to prepare for.
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayPlan {
    pub milestones: Vec<Milestone>,
    pub recommended_degrees: Vec<String>,
    pub top_skills: Vec<String>,
}

/// Builds the pathway prompt from the profile. The quiz strength and
/// interests personalise the plan; both have sensible defaults for students
/// who skipped the quiz.
pub fn build_prompt(career_title: &str, profile: &UserProfile) -> String {
    let strength = profile
        .quiz_result
        .as_ref()
        .map(|r| r.strength.as_str())
        .unwrap_or("General");
    let interests = if profile.interests.is_empty() {
        "General Learning".to_string()
    } else {
        profile.interests.join(", ")
    };

    PATHWAY_PROMPT_TEMPLATE
        .replace("{career_title}", career_title)
        .replace("{grade}", &profile.grade)
        .replace("{strength}", strength)
        .replace("{interests}", &interests)
}

/// Generates a pathway plan, substituting the fixed fallback plan if the
/// collaborator fails. Never returns an error.
pub async fn generate_pathway(
    career_title: &str,
    profile: &UserProfile,
    ai: &GeminiClient,
) -> PathwayPlan {
    let prompt = build_prompt(career_title, profile);

    match ai.call_json::<PathwayPlan>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(plan) => plan,
        Err(e) => {
            warn!("Pathway generation failed for '{career_title}', using fallback: {e}");
            fallback_pathway()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::CareerCatalog;
    use crate::quiz::result::QuizResult;

    #[test]
    fn test_prompt_uses_quiz_strength_when_present() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let mut profile = UserProfile::default();
        let mut result = QuizResult::fallback(&catalog);
        result.strength = "Analytical Thinking".to_string();
        profile.apply_quiz_result(result);

        let prompt = build_prompt("Software Engineer", &profile);
        assert!(prompt.contains("Strength: Analytical Thinking"));
        assert!(prompt.contains("Software Engineer"));
    }

    #[test]
    fn test_prompt_defaults_without_quiz() {
        let profile = UserProfile::default();
        let prompt = build_prompt("Chef", &profile);
        assert!(prompt.contains("Strength: General"));
        assert!(prompt.contains("Interests: General Learning"));
    }

    #[test]
    fn test_prompt_joins_interests() {
        let mut profile = UserProfile::default();
        profile.interests = vec!["Robotics".to_string(), "Space".to_string()];
        let prompt = build_prompt("Pilot", &profile);
        assert!(prompt.contains("Robotics, Space"));
    }

    #[test]
    fn test_pathway_plan_deserializes_wire_shape() {
        let json = r#"{
            "milestones": [{"stage": "Class 11-12", "actions": ["Take PCM"]}],
            "recommendedDegrees": ["B.Tech"],
            "topSkills": ["Math"]
        }"#;
        let plan: PathwayPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.milestones.len(), 1);
        assert_eq!(plan.recommended_degrees, vec!["B.Tech".to_string()]);
    }
}
