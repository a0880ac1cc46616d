use serde::{Deserialize, Serialize};

use crate::profile::saved::SavedCareers;
use crate::quiz::result::{QuizResult, SkillProfile};

/// The single active user profile. Persisted as one JSON document; the wire
/// casing matches what the store has always held, so old profiles load
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub grade: String,
    pub interests: Vec<String>,
    pub completed_quiz: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_result: Option<QuizResult>,
    pub saved_careers: SavedCareers,
    pub skill_progress: SkillProfile,
    pub achievements: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            grade: "10".to_string(),
            interests: Vec::new(),
            completed_quiz: false,
            quiz_result: None,
            saved_careers: SavedCareers::default(),
            // Matches the skill-profile display floor so a fresh profile
            // renders consistently with a just-scored one.
            skill_progress: SkillProfile::flat(20),
            achievements: Vec::new(),
        }
    }
}

/// Achievement appended the first time the quiz is completed.
pub const QUIZ_ACHIEVEMENT: &str = "Psychometric Profile Unlocked 🧠";

impl UserProfile {
    /// Applies a freshly scored quiz result: flips the completion flag,
    /// copies the skill profile into tracked progress, and grants the quiz
    /// achievement once.
    pub fn apply_quiz_result(&mut self, result: QuizResult) {
        self.completed_quiz = true;
        self.skill_progress = result.skill_profile;
        if !self.achievements.iter().any(|a| a == QUIZ_ACHIEVEMENT) {
            self.achievements.push(QUIZ_ACHIEVEMENT.to_string());
        }
        self.quiz_result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::CareerCatalog;

    #[test]
    fn test_apply_quiz_result_sets_flags_and_achievement() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let mut profile = UserProfile::default();
        profile.apply_quiz_result(QuizResult::fallback(&catalog));
        assert!(profile.completed_quiz);
        assert!(profile.quiz_result.is_some());
        assert_eq!(profile.achievements, vec![QUIZ_ACHIEVEMENT.to_string()]);
        assert_eq!(profile.skill_progress, SkillProfile::flat(50));
    }

    #[test]
    fn test_achievement_granted_once() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let mut profile = UserProfile::default();
        profile.apply_quiz_result(QuizResult::fallback(&catalog));
        profile.apply_quiz_result(QuizResult::fallback(&catalog));
        assert_eq!(profile.achievements.len(), 1);
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = UserProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grade, "10");
        assert!(json.contains("savedCareers"));
        assert!(json.contains("completedQuiz"));
    }
}
