//! Static fallback content served when the generative collaborator is
//! unavailable. The product rule is graceful degradation: useful generic
//! guidance beats an error page.

use crate::guidance::pathway::{Milestone, PathwayPlan};
use crate::guidance::projects::{Difficulty, ProjectIdea};

/// Generic four-stage pathway used when generation fails.
pub fn fallback_pathway() -> PathwayPlan {
    PathwayPlan {
        milestones: vec![
            Milestone {
                stage: "Foundation (Class 11-12)".to_string(),
                actions: vec![
                    "Focus on core subjects relevant to your stream (Science, Commerce, or Arts)"
                        .to_string(),
                    "Prepare for relevant entrance exams (e.g., JEE, NEET, CLAT, CUET)".to_string(),
                    "Maintain a consistent academic record (GPA/Percentage)".to_string(),
                ],
            },
            Milestone {
                stage: "Higher Education (Undergraduate)".to_string(),
                actions: vec![
                    "Pursue a Bachelor's degree or Diploma in your chosen field".to_string(),
                    "Participate in college clubs, hackathons, or cultural fests".to_string(),
                    "Seek internships during semester breaks to gain real-world experience"
                        .to_string(),
                ],
            },
            Milestone {
                stage: "Skill Specialization".to_string(),
                actions: vec![
                    "Identify and learn high-demand skills in your industry".to_string(),
                    "Obtain relevant certifications to boost your resume".to_string(),
                    "Build a portfolio of projects or case studies".to_string(),
                ],
            },
            Milestone {
                stage: "Professional Launch".to_string(),
                actions: vec![
                    "Create a professional network on LinkedIn".to_string(),
                    "Prepare for job interviews and aptitude tests".to_string(),
                    "Apply for entry-level positions or graduate trainee programs".to_string(),
                ],
            },
        ],
        recommended_degrees: vec![
            "Bachelor's Degree".to_string(),
            "Diploma".to_string(),
            "Professional Certification".to_string(),
        ],
        top_skills: vec![
            "Communication".to_string(),
            "Problem Solving".to_string(),
            "Time Management".to_string(),
            "Adaptability".to_string(),
        ],
    }
}

/// Static news digest shown when live fetching fails.
pub const FALLBACK_NEWS_TEXT: &str = "\
**System Notification: Live Updates Unavailable**\n\n\
We are currently unable to fetch real-time news due to high network traffic or API limits. \
Here are some general updates:\n\n\
1. **Entrance Exams:** Keep an eye on official NTA and state board websites for the latest \
announcements regarding JEE, NEET, and CUET.\n\
2. **Admissions:** University admission cycles typically begin in May-June. Check specific \
college portals for deadlines.\n\
3. **Career Trends:** Technology, Sustainability, and Healthcare continue to be high-growth \
sectors in India.\n\
4. **Advice:** Focus on skill building and exam preparation. Check back later for live news.";

/// Reply used when the mentor model cannot be reached.
pub const MENTOR_FALLBACK_REPLY: &str = "I'm having a little trouble connecting to the career \
    database right now. Please try again in a moment!";

/// Single generic starter project substituted when idea generation fails.
pub fn fallback_projects(interest: &str) -> Vec<ProjectIdea> {
    vec![ProjectIdea {
        title: format!("Starter Project in {interest}"),
        difficulty: Difficulty::Beginner,
        description: "A foundational project to explore basic concepts in this field. Start by \
            researching online tutorials."
            .to_string(),
        skills_gained: vec!["Research".to_string(), "Basics".to_string()],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_pathway_has_four_stages() {
        let plan = fallback_pathway();
        assert_eq!(plan.milestones.len(), 4);
        assert!(plan
            .milestones
            .iter()
            .all(|m| !m.actions.is_empty()));
    }

    #[test]
    fn test_fallback_projects_name_the_interest() {
        let projects = fallback_projects("Robotics");
        assert_eq!(projects.len(), 1);
        assert!(projects[0].title.contains("Robotics"));
    }
}
