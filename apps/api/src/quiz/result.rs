#![allow(dead_code)]

//! Engine output types. A `QuizResult` is immutable once produced; downstream
//! features (profile persistence, skill tracker, pathway prompts) consume it
//! read-only.

use serde::{Deserialize, Serialize};

use crate::catalog::careers::CareerCatalog;
use crate::quiz::constants::{FALLBACK_CONFIDENCE, FALLBACK_SKILL_VALUE, RECOMMENDED_COUNT};

/// Normalized skill profile across the six fixed dimensions. Values are
/// clamped into [20, 100]; the floor is a deliberate UX choice so no skill
/// ever displays as near-zero. Keys keep the PascalCase casing the profile
/// store has always persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SkillProfile {
    pub logic: u8,
    pub creativity: u8,
    pub communication: u8,
    pub coding: u8,
    pub leadership: u8,
    pub collaboration: u8,
}

impl SkillProfile {
    pub const fn flat(value: u8) -> Self {
        Self {
            logic: value,
            creativity: value,
            communication: value,
            coding: value,
            leadership: value,
            collaboration: value,
        }
    }

    pub fn values(&self) -> [u8; 6] {
        [
            self.logic,
            self.creativity,
            self.communication,
            self.coding,
            self.leadership,
            self.collaboration,
        ]
    }
}

/// The single immutable result of scoring a completed survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub recommended_stream: String,
    /// Industries of the top-scored careers, best first. Duplicates are
    /// allowed when top careers share an industry.
    pub top_clusters: Vec<String>,
    pub strength: String,
    pub learning_style: String,
    /// Match confidence percentage, 0–98.
    pub confidence_score: u8,
    /// Career ids, best match first, exactly min(6, catalog size), no
    /// duplicates.
    pub recommended_careers: Vec<String>,
    pub skill_profile: SkillProfile,
    pub personality_description: String,
}

impl QuizResult {
    /// The fixed neutral result substituted when scoring cannot run. Never an
    /// error state: the student always finishes the flow with a result.
    pub fn fallback(catalog: &CareerCatalog) -> Self {
        Self {
            recommended_stream: "General".to_string(),
            top_clusters: vec!["General".to_string()],
            strength: "Versatile".to_string(),
            learning_style: "Mixed".to_string(),
            confidence_score: FALLBACK_CONFIDENCE,
            recommended_careers: catalog
                .all()
                .iter()
                .take(RECOMMENDED_COUNT)
                .map(|c| c.id.clone())
                .collect(),
            skill_profile: SkillProfile::flat(FALLBACK_SKILL_VALUE),
            personality_description: "You have a balanced profile.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::CareerCatalog;

    #[test]
    fn test_fallback_shape() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let result = QuizResult::fallback(&catalog);
        assert_eq!(result.recommended_stream, "General");
        assert_eq!(result.confidence_score, 70);
        assert_eq!(result.recommended_careers.len(), 6);
        assert_eq!(result.skill_profile, SkillProfile::flat(50));
    }

    #[test]
    fn test_fallback_on_empty_catalog_has_no_recommendations() {
        let catalog = CareerCatalog::from_records(vec![]);
        let result = QuizResult::fallback(&catalog);
        assert!(result.recommended_careers.is_empty());
        assert_eq!(result.confidence_score, 70);
    }

    #[test]
    fn test_wire_casing_matches_persisted_shape() {
        let result = QuizResult {
            recommended_stream: "Commerce".into(),
            top_clusters: vec!["Finance".into()],
            strength: "Organization".into(),
            learning_style: "Logical".into(),
            confidence_score: 80,
            recommended_careers: vec!["chartered-accountant".into()],
            skill_profile: SkillProfile::flat(50),
            personality_description: "desc".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("recommendedStream").is_some());
        assert!(json.get("confidenceScore").is_some());
        assert!(json["skillProfile"].get("Communication").is_some());
        assert!(json["skillProfile"].get("Coding").is_some());
    }
}
