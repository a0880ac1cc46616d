//! Scoring engine — turns a response set and the career catalog into a
//! `QuizResult`.
//!
//! Pure and deterministic: no clock, no randomness, no I/O. Identical inputs
//! always produce an identical result. The engine never partially
//! aggregates; missing ratings default to neutral before anything is summed.
//!
//! The fallback path is explicit: `try_score` returns
//! `Result<QuizResult, AggregationFailure>` and `score` substitutes the fixed
//! neutral result on failure, so the student always finishes the flow.

use thiserror::Error;
use tracing::warn;

use crate::catalog::careers::{CareerCatalog, CareerRecord, Industry};
use crate::catalog::survey::{Axis, Trait, STATEMENTS};
use crate::quiz::collector::ResponseSet;
use crate::quiz::constants::*;
use crate::quiz::personality;
use crate::quiz::result::{QuizResult, SkillProfile};

/// Summed rating per trait across all statements carrying that trait.
/// Sums, not averages: the statement count per trait is itself a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraitTotals([u32; Trait::COUNT]);

impl TraitTotals {
    pub fn get(&self, t: Trait) -> u32 {
        self.0[t as usize]
    }

    fn add(&mut self, t: Trait, rating: u32) {
        self.0[t as usize] += rating;
    }
}

/// Summed rating per RIASEC axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisTotals([u32; Axis::ALL.len()]);

impl AxisTotals {
    pub fn get(&self, axis: Axis) -> u32 {
        self.0[axis as usize]
    }

    fn add(&mut self, axis: Axis, rating: u32) {
        self.0[axis as usize] += rating;
    }
}

/// Scoring could not run at all. Recovered locally by substituting the fixed
/// fallback result; never surfaced to the end user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationFailure {
    #[error("career catalog is empty")]
    EmptyCatalog,
}

/// Scores the survey, substituting the fixed neutral result if aggregation
/// fails. This is the entry point callers use; the fallback is a visible
/// branch here rather than a hidden catch.
pub fn score(responses: &ResponseSet, catalog: &CareerCatalog) -> QuizResult {
    match try_score(responses, catalog) {
        Ok(result) => result,
        Err(failure) => {
            warn!("scoring failed ({failure}), substituting neutral result");
            QuizResult::fallback(catalog)
        }
    }
}

/// The scoring pipeline. Total for any non-empty catalog.
pub fn try_score(
    responses: &ResponseSet,
    catalog: &CareerCatalog,
) -> Result<QuizResult, AggregationFailure> {
    if catalog.is_empty() {
        return Err(AggregationFailure::EmptyCatalog);
    }

    // 1. Aggregate. Every statement contributes exactly once; skipped items
    // count as neutral.
    let (traits, axes) = aggregate(responses);

    // 2. Classify personality.
    let (primary, secondary) = classify(&axes);
    let personality_description = describe_personality(primary, secondary, &traits);

    // 3–4. Score every career, then rank. The sort is stable, so equal
    // scores keep catalog order and results are reproducible.
    let mut ranked: Vec<(&CareerRecord, i32)> = catalog
        .all()
        .iter()
        .map(|career| (career, score_career(career, &traits, primary, secondary)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let recommended_careers: Vec<String> = ranked
        .iter()
        .take(RECOMMENDED_COUNT)
        .map(|(career, _)| career.id.clone())
        .collect();

    let (top_career, top_score) = ranked[0];

    let top_clusters: Vec<String> = ranked
        .iter()
        .take(CLUSTER_COUNT)
        .map(|(career, _)| career.industry.to_string())
        .collect();

    Ok(QuizResult {
        recommended_stream: recommended_stream(top_career.industry).to_string(),
        top_clusters,
        strength: personality::strength(primary).to_string(),
        learning_style: personality::learning_style(primary).to_string(),
        confidence_score: confidence(top_score),
        recommended_careers,
        skill_profile: skill_profile(&traits),
        personality_description,
    })
}

/// Sums ratings into trait and axis totals, defaulting missing ratings to
/// neutral (3).
fn aggregate(responses: &ResponseSet) -> (TraitTotals, AxisTotals) {
    let mut traits = TraitTotals::default();
    let mut axes = AxisTotals::default();

    for s in STATEMENTS {
        let rating = responses
            .get(&s.id)
            .map(|&r| u32::from(r))
            .unwrap_or(NEUTRAL_RATING);
        traits.add(s.trait_, rating);
        axes.add(s.axis, rating);
    }

    (traits, axes)
}

/// Picks the primary and secondary axes. Ties resolve to the earlier axis in
/// the fixed R,I,A,S,E,C priority order: the sort is stable and the
/// candidates are generated in that order.
fn classify(axes: &AxisTotals) -> (Axis, Axis) {
    let mut entries: Vec<(Axis, u32)> = Axis::ALL.iter().map(|&a| (a, axes.get(a))).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    (entries[0].0, entries[1].0)
}

fn describe_personality(primary: Axis, secondary: Axis, traits: &TraitTotals) -> String {
    let mut parts = vec![personality::archetype(primary)];

    if let Some(clause) = personality::blend_clause(primary, secondary) {
        parts.push(clause);
    }
    if primary == Axis::C && traits.get(Trait::Govt) > GOVT_CLAUSE_FLOOR {
        parts.push(personality::GOVT_STABILITY_CLAUSE);
    }

    parts.join(" ")
}

/// Scores one career as the sum of independent weighted rule contributions.
/// Rules are additive, never exclusive; a career can match several families,
/// and the research penalty can push a total negative.
fn score_career(
    career: &CareerRecord,
    traits: &TraitTotals,
    primary: Axis,
    secondary: Axis,
) -> i32 {
    let t = |tr: Trait| traits.get(tr);
    let mut score = 0i32;

    // A. RIASEC axis match.
    match career.primary_axis() {
        Some(axis) if axis == primary => score += PRIMARY_AXIS_POINTS,
        Some(axis) if axis == secondary => score += SECONDARY_AXIS_POINTS,
        _ => {}
    }

    // B. Subject/industry affinity.
    if t(Trait::Tech) >= TRAIT_THRESHOLD
        && (career.has_tag("Tech") || career.industry == Industry::Technology)
    {
        score += TECH_POINTS;
    }
    if t(Trait::Math) >= TRAIT_THRESHOLD
        && (career.has_subject("Math") || career.has_subject("CS"))
    {
        score += MATH_POINTS;
    }
    if t(Trait::Physics) >= TRAIT_THRESHOLD
        && (career.has_subject("Physics") || career.industry == Industry::Engineering)
    {
        score += PHYSICS_POINTS;
    }
    if t(Trait::Bio) >= TRAIT_THRESHOLD
        && (career.has_subject("Biology")
            || career.industry == Industry::Healthcare
            || career.industry == Industry::Agriculture)
    {
        score += BIO_POINTS;
    }
    if t(Trait::Medical) >= TRAIT_THRESHOLD && career.industry == Industry::Healthcare {
        score += MEDICAL_POINTS;
    }
    if t(Trait::Creative) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Creative || career.has_tag("Creative"))
    {
        score += CREATIVE_POINTS;
    }
    if t(Trait::Design) >= TRAIT_THRESHOLD
        && (career.has_tag("Design") || career.industry == Industry::Creative)
    {
        score += DESIGN_POINTS;
    }
    if t(Trait::Commerce) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Finance || career.has_subject("Accounts"))
    {
        score += COMMERCE_POINTS;
    }
    if t(Trait::Finance) >= TRAIT_THRESHOLD && career.industry == Industry::Finance {
        score += FINANCE_POINTS;
    }
    if t(Trait::Humanities) >= TRAIT_THRESHOLD
        && matches!(
            career.industry,
            Industry::Humanities | Industry::Legal | Industry::Social
        )
    {
        score += HUMANITIES_POINTS;
    }
    if t(Trait::Language) >= TRAIT_THRESHOLD
        && (career.has_tag("Writing") || career.industry == Industry::Media)
    {
        score += LANGUAGE_POINTS;
    }

    // C. Goal/commitment rules.
    if t(Trait::Govt) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Govt
            || career.industry == Industry::Defense
            || career.has_tag("Govt"))
    {
        score += GOVT_POINTS;
    }
    // High hands-on interest, or likes mechanics but cold on theory.
    if (t(Trait::Vocational) >= VOCATIONAL_THRESHOLD
        || (t(Trait::Mechanics) >= MECHANICS_THRESHOLD
            && t(Trait::Physics) < PHYSICS_LOW_CEILING))
        && (career.industry == Industry::Vocational || career.has_tag("Trade"))
    {
        score += VOCATIONAL_POINTS;
    }
    if t(Trait::Defense) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Defense || career.has_tag("Police"))
    {
        score += DEFENSE_POINTS;
    }
    // Physicality link: sports careers reward defense/hands-on profiles.
    if career.industry == Industry::Sports
        && (t(Trait::Defense) >= TRAIT_THRESHOLD || t(Trait::Vocational) >= TRAIT_THRESHOLD)
    {
        score += SPORTS_PHYSICALITY_POINTS;
    }
    if t(Trait::Nature) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Agriculture || career.has_tag("Nature"))
    {
        score += NATURE_POINTS;
    }
    let long_study =
        career.education.contains("PhD") || career.education.contains("MBBS");
    if t(Trait::Research) >= TRAIT_THRESHOLD && (career.has_tag("Research") || long_study) {
        score += RESEARCH_BONUS;
    } else if t(Trait::Research) <= RESEARCH_LOW_CEILING && long_study {
        score += RESEARCH_PENALTY;
    }

    // D. Lifestyle/niche rules.
    if t(Trait::Travel) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Aviation
            || career.industry == Industry::Logistics
            || career.has_tag("Travel")
            || career.has_tag("Sea"))
    {
        score += TRAVEL_POINTS;
    }
    if t(Trait::Food) >= TRAIT_THRESHOLD
        && (career.has_tag("Food")
            || career.industry == Industry::Agriculture
            || career.industry == Industry::Vocational)
    {
        score += FOOD_POINTS;
    }
    if t(Trait::Teaching) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Education
            || career.has_tag("Teaching")
            || career.has_tag("Coach"))
    {
        score += TEACHING_POINTS;
    }
    if t(Trait::Sports) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Sports || career.has_tag("Sport"))
    {
        score += SPORTS_POINTS;
    }
    if t(Trait::Law) >= TRAIT_THRESHOLD
        && (career.industry == Industry::Legal || career.has_tag("Law"))
    {
        score += LAW_POINTS;
    }
    if t(Trait::Agri) >= TRAIT_THRESHOLD && career.industry == Industry::Agriculture {
        score += AGRI_POINTS;
    }

    score
}

/// Maps the top career's industry to a recommended education stream.
/// Exhaustive over the closed industry set: a new industry must pick a
/// stream here before the catalog can carry it.
pub fn recommended_stream(industry: Industry) -> &'static str {
    match industry {
        Industry::Vocational => "Vocational / ITI / Skill Development",
        Industry::Technology | Industry::Engineering | Industry::Aviation => "Science (PCM)",
        Industry::Healthcare | Industry::Agriculture => "Science (PCB)",
        Industry::Finance | Industry::Business => "Commerce",
        Industry::Legal | Industry::Humanities | Industry::Govt => "Arts / Humanities",
        Industry::Defense => "Any Stream (Prep for NDA/Defense Exams)",
        Industry::Creative => "Any Stream + Design/Media Portfolio",
        Industry::Social | Industry::Media | Industry::Logistics | Industry::Sports
        | Industry::Education => "General",
    }
}

/// Normalizes the top career score into a 0–98 match percentage. A negative
/// top score (possible when only penalties fire) clamps to 0.
fn confidence(top_score: i32) -> u8 {
    let pct = (f64::from(top_score.max(0)) / CONFIDENCE_DIVISOR * 100.0).round() as u32;
    pct.min(u32::from(CONFIDENCE_CAP)) as u8
}

/// Six fixed skill dimensions, each a normalized sum of trait totals.
fn skill_profile(traits: &TraitTotals) -> SkillProfile {
    let t = |tr: Trait| traits.get(tr);

    SkillProfile {
        logic: normalize(t(Trait::Math) + t(Trait::Logic) + t(Trait::Tech), LOGIC_MAX),
        creativity: normalize(
            t(Trait::Creative) + t(Trait::Design) + t(Trait::Abstract),
            CREATIVITY_MAX,
        ),
        communication: normalize(
            t(Trait::Language) + t(Trait::Leadership) + t(Trait::Empathy) + t(Trait::Law),
            COMMUNICATION_MAX,
        ),
        coding: normalize(t(Trait::Tech) + t(Trait::Math), CODING_MAX),
        leadership: normalize(
            t(Trait::Leadership) + t(Trait::Ambition) + t(Trait::Law),
            LEADERSHIP_MAX,
        ),
        collaboration: normalize(
            t(Trait::Empathy) + t(Trait::Nature) + t(Trait::Teaching) + t(Trait::Sports),
            COLLABORATION_MAX,
        ),
    }
}

fn normalize(sum: u32, max_expected: f64) -> u8 {
    let scaled = (f64::from(sum) / max_expected * 100.0).round() as i64;
    scaled.clamp(i64::from(SKILL_FLOOR), i64::from(SKILL_CEILING)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::CareerCatalog;
    use crate::catalog::survey::STATEMENTS;
    use std::collections::HashSet;

    fn career(id: &str, industry: Industry, code: &str) -> CareerRecord {
        CareerRecord {
            id: id.to_string(),
            title: id.to_string(),
            industry,
            description: String::new(),
            salary_range: String::new(),
            education: String::new(),
            growth_score: 50,
            tags: vec![],
            skills: vec![],
            subjects: vec![],
            personality_type: code.to_string(),
        }
    }

    /// Builds a full response set by asking `f` for each statement's rating.
    fn responses_by(f: impl Fn(&crate::catalog::survey::SurveyStatement) -> u8) -> ResponseSet {
        STATEMENTS.iter().map(|s| (s.id, f(s))).collect()
    }

    fn neutral() -> ResponseSet {
        responses_by(|_| 3)
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let responses = responses_by(|s| (s.id % 5 + 1) as u8);
        let a = try_score(&responses, &catalog).unwrap();
        let b = try_score(&responses, &catalog).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_answers_default_to_neutral() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let empty = ResponseSet::new();
        assert_eq!(
            try_score(&empty, &catalog).unwrap(),
            try_score(&neutral(), &catalog).unwrap()
        );
    }

    #[test]
    fn test_recommended_count_and_uniqueness() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let result = try_score(&neutral(), &catalog).unwrap();
        assert_eq!(result.recommended_careers.len(), 6);
        let unique: HashSet<&String> = result.recommended_careers.iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_small_catalog_truncates_recommendations_and_clusters() {
        let catalog = CareerCatalog::from_records(vec![
            career("a", Industry::Technology, "IRC"),
            career("b", Industry::Finance, "CEI"),
        ]);
        let result = try_score(&neutral(), &catalog).unwrap();
        assert_eq!(result.recommended_careers.len(), 2);
        assert_eq!(result.top_clusters.len(), 2);
    }

    #[test]
    fn test_all_realistic_makes_primary_r() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let responses = responses_by(|s| if s.axis == Axis::R { 5 } else { 1 });
        let result = try_score(&responses, &catalog).unwrap();
        assert_eq!(result.strength, "Practical Skills");
        assert_eq!(result.learning_style, "Kinesthetic (Doing)");
    }

    #[test]
    fn test_axis_tie_breaks_by_priority_order() {
        // All-neutral ratings give R and I different totals only through
        // statement counts; force an exact tie with a uniform set and check
        // the fixed priority order wins.
        let axes = {
            let mut a = AxisTotals::default();
            for axis in Axis::ALL {
                a.add(axis, 10);
            }
            a
        };
        let (primary, secondary) = classify(&axes);
        assert_eq!(primary, Axis::R);
        assert_eq!(secondary, Axis::I);
    }

    #[test]
    fn test_axis_match_points() {
        let traits = TraitTotals::default();
        let primary_match = career("p", Industry::Technology, "RIC");
        let secondary_match = career("s", Industry::Technology, "IRC");
        let no_match = career("n", Industry::Technology, "AES");
        assert_eq!(score_career(&primary_match, &traits, Axis::R, Axis::I), 20);
        assert_eq!(score_career(&secondary_match, &traits, Axis::R, Axis::I), 10);
        assert_eq!(score_career(&no_match, &traits, Axis::R, Axis::I), 0);
    }

    #[test]
    fn test_career_matching_no_rules_scores_zero() {
        let catalog = CareerCatalog::from_records(vec![career("z", Industry::Media, "AES")]);
        let responses = responses_by(|_| 1);
        // Primary axis with all-1 ratings is R by priority; "AES" matches
        // neither primary nor secondary, and no trait clears a threshold.
        let result = try_score(&responses, &catalog).unwrap();
        assert_eq!(result.recommended_careers, vec!["z".to_string()]);
        assert_eq!(result.confidence_score, 0);
    }

    #[test]
    fn test_research_penalty_can_go_negative() {
        let mut long_study = career("md", Industry::Healthcare, "XXX");
        long_study.education = "MBBS (NEET)".to_string();
        let traits = TraitTotals::default(); // Research total 0 <= 2
        assert_eq!(score_career(&long_study, &traits, Axis::R, Axis::I), -10);
    }

    #[test]
    fn test_research_bonus_for_committed_students() {
        let mut long_study = career("md", Industry::Healthcare, "XXX");
        long_study.education = "Masters + PhD".to_string();
        let responses = responses_by(|s| if s.trait_ == Trait::Research { 5 } else { 3 });
        let (traits, _) = aggregate(&responses);
        // +10 research bonus; the medical/bio rules don't fire at neutral.
        assert_eq!(score_career(&long_study, &traits, Axis::R, Axis::I), 10);
    }

    #[test]
    fn test_vocational_gate_requires_both_statements() {
        let mut trade = career("el", Industry::Vocational, "XXX");
        trade.tags = vec!["Trade".to_string()];

        // One hands-on statement at 5, the other at 2: total 7, below the
        // doubled threshold.
        let below = responses_by(|s| match s.id {
            7 => 5,
            13 => 2,
            _ => 1,
        });
        let (traits, _) = aggregate(&below);
        assert_eq!(score_career(&trade, &traits, Axis::I, Axis::A), 0);

        let above = responses_by(|s| if s.trait_ == Trait::Vocational { 4 } else { 1 });
        let (traits, _) = aggregate(&above);
        assert_eq!(score_career(&trade, &traits, Axis::I, Axis::A), 30);
    }

    #[test]
    fn test_mechanics_without_theory_also_opens_vocational() {
        let mut trade = career("el", Industry::Vocational, "XXX");
        trade.tags = vec!["Trade".to_string()];
        let responses = responses_by(|s| match s.trait_ {
            Trait::Mechanics => 5,
            Trait::Physics => 2,
            _ => 1,
        });
        let (traits, _) = aggregate(&responses);
        assert_eq!(score_career(&trade, &traits, Axis::I, Axis::A), 30);
    }

    #[test]
    fn test_sports_industry_physicality_link() {
        let athlete = career("ath", Industry::Sports, "XXX");
        let responses = responses_by(|s| if s.trait_ == Trait::Defense { 5 } else { 1 });
        let (traits, _) = aggregate(&responses);
        // Defense >= 4 triggers the physicality link for sports careers.
        assert_eq!(score_career(&athlete, &traits, Axis::I, Axis::A), 15);
    }

    #[test]
    fn test_law_affinity_rewards_legal_industry() {
        let lawyer = career("law", Industry::Legal, "XXX");
        let responses = responses_by(|s| if s.trait_ == Trait::Law { 5 } else { 1 });
        let (traits, _) = aggregate(&responses);
        assert_eq!(score_career(&lawyer, &traits, Axis::I, Axis::A), 25);
    }

    #[test]
    fn test_stream_follows_top_career_industry() {
        assert_eq!(recommended_stream(Industry::Finance), "Commerce");
        assert_eq!(
            recommended_stream(Industry::Vocational),
            "Vocational / ITI / Skill Development"
        );
        assert_eq!(recommended_stream(Industry::Healthcare), "Science (PCB)");
        assert_eq!(recommended_stream(Industry::Aviation), "Science (PCM)");
        assert_eq!(recommended_stream(Industry::Media), "General");
    }

    #[test]
    fn test_confidence_is_capped_and_floored() {
        assert_eq!(confidence(200), 98);
        assert_eq!(confidence(90), 98); // round(100) capped
        assert_eq!(confidence(45), 50);
        assert_eq!(confidence(0), 0);
        assert_eq!(confidence(-30), 0);
    }

    #[test]
    fn test_skill_profile_bounds_hold_at_extremes() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        for rating in [1u8, 5u8] {
            let result = try_score(&responses_by(|_| rating), &catalog).unwrap();
            for value in result.skill_profile.values() {
                assert!((20..=100).contains(&value), "skill value {value} out of range");
            }
        }
    }

    #[test]
    fn test_skill_floor_applies_to_low_scorers() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let result = try_score(&responses_by(|_| 1), &catalog).unwrap();
        // All-1 ratings: every dimension lands at the floor except
        // Communication, whose four contributing traits sum to 4/18 = 22%.
        assert_eq!(
            result.skill_profile,
            SkillProfile {
                logic: 20,
                creativity: 20,
                communication: 22,
                coding: 20,
                leadership: 20,
                collaboration: 20,
            }
        );
    }

    #[test]
    fn test_empty_catalog_falls_back() {
        let catalog = CareerCatalog::from_records(vec![]);
        assert_eq!(
            try_score(&neutral(), &catalog),
            Err(AggregationFailure::EmptyCatalog)
        );
        let result = score(&neutral(), &catalog);
        assert_eq!(result.confidence_score, 70);
        assert_eq!(result.skill_profile, SkillProfile::flat(50));
        assert!(result.recommended_careers.is_empty());
    }

    #[test]
    fn test_clusters_are_top_three_industries_with_duplicates() {
        let catalog = CareerCatalog::from_records(vec![
            career("a", Industry::Technology, "IRC"),
            career("b", Industry::Technology, "ICR"),
            career("c", Industry::Finance, "CEI"),
            career("d", Industry::Media, "AES"),
        ]);
        let responses = responses_by(|s| if s.trait_ == Trait::Tech { 5 } else { 3 });
        let result = try_score(&responses, &catalog).unwrap();
        assert_eq!(
            result.top_clusters,
            vec!["Technology".to_string(), "Technology".to_string(), "Finance".to_string()]
        );
    }

    #[test]
    fn test_personality_blend_clause_innovator() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let responses = responses_by(|s| match s.axis {
            Axis::I => 5,
            Axis::A => 4,
            _ => 1,
        });
        let result = try_score(&responses, &catalog).unwrap();
        assert!(result.personality_description.contains("'Thinker'"));
        assert!(result.personality_description.contains("innovator"));
    }

    #[test]
    fn test_govt_stability_clause_gated_on_trait() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        // Primary C with a strong Govt answer.
        let responses = responses_by(|s| match (s.axis, s.trait_) {
            (_, Trait::Govt) => 5,
            (Axis::C, _) => 5,
            _ => 1,
        });
        let result = try_score(&responses, &catalog).unwrap();
        assert!(result
            .personality_description
            .contains("Government services"));

        // Primary C but an indifferent Govt answer: no clause.
        let responses = responses_by(|s| match (s.axis, s.trait_) {
            (_, Trait::Govt) => 2,
            (Axis::C, _) => 5,
            _ => 1,
        });
        let result = try_score(&responses, &catalog).unwrap();
        assert!(!result
            .personality_description
            .contains("Government services"));
    }

    #[test]
    fn test_tech_profile_recommends_pcm_stream() {
        let catalog = CareerCatalog::load_embedded().unwrap();
        let responses = responses_by(|s| {
            if matches!(s.trait_, Trait::Tech | Trait::Math | Trait::Logic) || s.axis == Axis::I {
                5
            } else {
                1
            }
        });
        let result = try_score(&responses, &catalog).unwrap();
        assert_eq!(result.recommended_stream, "Science (PCM)");
        assert!(result.confidence_score > 40);
    }
}
