//! Scoring policy constants — every threshold, point value, and normalization
//! divisor the engine uses, in one auditable table.
//!
//! The confidence divisor and the per-skill max-expected sums are empirical
//! tuning values, not derived quantities. Change them only with
//! re-validation against recorded survey runs.

/// Rating defaulted in for a skipped statement. Mid-point of the 1–5 scale.
pub const NEUTRAL_RATING: u32 = 3;

// Axis match (rule family A)
pub const PRIMARY_AXIS_POINTS: i32 = 20;
pub const SECONDARY_AXIS_POINTS: i32 = 10;

/// Standard per-trait threshold for single-statement traits: "agree or
/// strongly agree" on the one statement feeding the trait.
pub const TRAIT_THRESHOLD: u32 = 4;

// Subject/industry affinity (rule family B)
pub const TECH_POINTS: i32 = 15;
pub const MATH_POINTS: i32 = 10;
pub const PHYSICS_POINTS: i32 = 10;
pub const BIO_POINTS: i32 = 15;
pub const MEDICAL_POINTS: i32 = 15;
pub const CREATIVE_POINTS: i32 = 15;
pub const DESIGN_POINTS: i32 = 10;
pub const COMMERCE_POINTS: i32 = 15;
pub const FINANCE_POINTS: i32 = 10;
pub const HUMANITIES_POINTS: i32 = 15;
pub const LANGUAGE_POINTS: i32 = 10;

// Goal/commitment rules (rule family C)
pub const GOVT_POINTS: i32 = 25;
/// Two statements feed the Vocational trait, so the threshold is doubled.
pub const VOCATIONAL_THRESHOLD: u32 = 8;
/// Alternate gate: likes mechanics but cold on physics theory.
pub const MECHANICS_THRESHOLD: u32 = 4;
pub const PHYSICS_LOW_CEILING: u32 = 3;
pub const VOCATIONAL_POINTS: i32 = 30;
pub const DEFENSE_POINTS: i32 = 25;
pub const SPORTS_PHYSICALITY_POINTS: i32 = 15;
pub const NATURE_POINTS: i32 = 15;
pub const RESEARCH_BONUS: i32 = 10;
/// Applied when research commitment is low and the career needs a long
/// course of study. Can push a total negative, which simply demotes it.
pub const RESEARCH_PENALTY: i32 = -10;
pub const RESEARCH_LOW_CEILING: u32 = 2;

// Lifestyle/niche rules (rule family D)
pub const TRAVEL_POINTS: i32 = 20;
pub const FOOD_POINTS: i32 = 15;
pub const TEACHING_POINTS: i32 = 20;
pub const SPORTS_POINTS: i32 = 25;
pub const LAW_POINTS: i32 = 25;
pub const AGRI_POINTS: i32 = 25;

/// Approximate maximum attainable career score, used to normalize the top
/// score into a match-confidence percentage. Empirical.
pub const CONFIDENCE_DIVISOR: f64 = 90.0;
/// Confidence is capped below 100 so the UI never claims a perfect match.
pub const CONFIDENCE_CAP: u8 = 98;

/// Number of careers returned in the ranked recommendation list.
pub const RECOMMENDED_COUNT: usize = 6;
/// Number of industries reported as top clusters.
pub const CLUSTER_COUNT: usize = 3;

/// UX floor for displayed skill values: no skill renders near zero.
pub const SKILL_FLOOR: u8 = 20;
pub const SKILL_CEILING: u8 = 100;

// Per-skill max-expected contributing sums (normalization denominators).
// Empirical, sized to the trait sums feeding each dimension.
pub const LOGIC_MAX: f64 = 15.0;
pub const CREATIVITY_MAX: f64 = 15.0;
pub const COMMUNICATION_MAX: f64 = 18.0;
pub const CODING_MAX: f64 = 10.0;
pub const LEADERSHIP_MAX: f64 = 15.0;
pub const COLLABORATION_MAX: f64 = 20.0;

// Fallback result values (substituted when scoring cannot run).
pub const FALLBACK_CONFIDENCE: u8 = 70;
pub const FALLBACK_SKILL_VALUE: u8 = 50;

/// Govt-trait total above which an Organizer personality gets the stability
/// clause appended to its description.
pub const GOVT_CLAUSE_FLOOR: u32 = 3;
