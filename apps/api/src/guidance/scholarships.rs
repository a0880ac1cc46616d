//! Scholarship discovery — a static reference list plus live search-grounded
//! discovery of currently open scholarships.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai_client::prompts::SCHOLARSHIPS_PROMPT_TEMPLATE;
use crate::ai_client::{extract_json_array, GeminiClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScholarshipCategory {
    Central,
    State,
    Private,
    Exam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub category: ScholarshipCategory,
    pub country: String,
    pub amount: String,
    pub deadline: String,
    pub eligibility: String,
    pub link: String,
}

/// Static reference scholarships shown regardless of collaborator health.
pub fn reference_scholarships() -> Vec<Scholarship> {
    let entry = |id: &str,
                 name: &str,
                 category: ScholarshipCategory,
                 amount: &str,
                 deadline: &str,
                 eligibility: &str,
                 link: &str| Scholarship {
        id: id.to_string(),
        name: name.to_string(),
        category,
        country: "India".to_string(),
        amount: amount.to_string(),
        deadline: deadline.to_string(),
        eligibility: eligibility.to_string(),
        link: link.to_string(),
    };

    vec![
        entry(
            "nmms",
            "National Means-cum-Merit Scholarship (NMMSS)",
            ScholarshipCategory::Central,
            "₹12,000/yr",
            "October (annual)",
            "Class 8 students, family income below ₹3.5 lakh, selection test",
            "https://scholarships.gov.in",
        ),
        entry(
            "inspire-she",
            "INSPIRE Scholarship for Higher Education (SHE)",
            ScholarshipCategory::Central,
            "₹80,000/yr",
            "Varies (post Class 12)",
            "Top 1% in Class 12 boards pursuing B.Sc/B.S in natural sciences",
            "https://online-inspire.gov.in",
        ),
        entry(
            "pm-yasasvi",
            "PM YASASVI Entrance Test Scholarship",
            ScholarshipCategory::Central,
            "Up to ₹1,25,000/yr",
            "August (annual)",
            "Class 9 and 11 students from OBC/EBC/DNT categories",
            "https://yet.nta.ac.in",
        ),
        entry(
            "ntse",
            "National Talent Search Examination (NTSE)",
            ScholarshipCategory::Exam,
            "₹1,250–2,000/month",
            "State-wise (Class 10)",
            "Class 10 students; two-stage selection examination",
            "https://ncert.nic.in",
        ),
        entry(
            "aicte-pragati",
            "AICTE Pragati Scholarship for Girls",
            ScholarshipCategory::Central,
            "₹50,000/yr",
            "October (annual)",
            "Girl students in AICTE-approved technical diploma/degree courses",
            "https://scholarships.gov.in",
        ),
        entry(
            "sitaram-jindal",
            "Sitaram Jindal Foundation Scholarship",
            ScholarshipCategory::Private,
            "₹500–3,200/month",
            "Rolling",
            "Class 11 onwards, merit and means based",
            "https://www.sitaramjindalfoundation.org",
        ),
    ]
}

/// Discovers currently open scholarships via search grounding. The model
/// cannot be forced into JSON mode alongside the search tool, so the array
/// is extracted defensively from the text. Empty list on any failure.
pub async fn discover_live(ai: &GeminiClient) -> Vec<Scholarship> {
    let month_year = chrono::Utc::now().format("%B %Y").to_string();
    let prompt = SCHOLARSHIPS_PROMPT_TEMPLATE.replace("{month_year}", &month_year);

    let text = match ai.call_with_search(&prompt).await {
        Ok((text, _sources)) => text,
        Err(e) => {
            warn!("Live scholarship discovery failed: {e}");
            return Vec::new();
        }
    };

    parse_scholarship_array(&text)
}

fn parse_scholarship_array(text: &str) -> Vec<Scholarship> {
    let Some(array) = extract_json_array(text) else {
        warn!("No JSON array found in scholarship response");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<Scholarship>>(array) {
        Ok(list) => list,
        Err(e) => {
            warn!("Failed to parse scholarship array: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_list_is_non_empty_and_indian() {
        let list = reference_scholarships();
        assert!(list.len() >= 5);
        assert!(list.iter().all(|s| s.country == "India"));
    }

    #[test]
    fn test_parse_array_with_surrounding_prose() {
        let text = r#"Here is what I found:
[{"id":"NEW1","name":"Test Scholarship","category":"Private","country":"India","amount":"₹10,000","deadline":"Soon","eligibility":"All","link":"https://example.in"}]
Let me know if you need more."#;
        let list = parse_scholarship_array(text);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].category, ScholarshipCategory::Private);
    }

    #[test]
    fn test_parse_garbage_yields_empty() {
        assert!(parse_scholarship_array("sorry, nothing today").is_empty());
        assert!(parse_scholarship_array("[{\"id\": broken").is_empty());
    }
}
