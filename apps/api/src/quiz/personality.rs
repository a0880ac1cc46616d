//! Personality classification text — fixed archetype descriptions per primary
//! axis and the small secondary-blend lookup.

use crate::catalog::survey::Axis;

/// Archetype description for a primary axis.
pub fn archetype(axis: Axis) -> &'static str {
    match axis {
        Axis::R => {
            "You are a 'Doer'. You are practical, realistic, and love seeing tangible results. \
             You enjoy working with tools, machines, nature, or your hands."
        }
        Axis::I => {
            "You are a 'Thinker'. You are analytical, intellectual, and curious. You love \
             solving complex puzzles and understanding the 'why' behind things."
        }
        Axis::A => {
            "You are a 'Creator'. You are expressive, original, and independent. You thrive \
             in environments where you can use your imagination."
        }
        Axis::S => {
            "You are a 'Helper'. You are kind, generous, and patient. You find satisfaction \
             in teaching, healing, or guiding others."
        }
        Axis::E => {
            "You are a 'Persuader'. You are energetic, ambitious, and confident. You enjoy \
             leading teams, selling ideas, and taking risks."
        }
        Axis::C => {
            "You are an 'Organizer'. You are detail-oriented, precise, and efficient. You \
             value structure, stability, and clear guidelines."
        }
    }
}

/// Secondary clause for specific (primary, secondary) blends. Most pairs have
/// no custom text, which is expected, not an error.
pub fn blend_clause(primary: Axis, secondary: Axis) -> Option<&'static str> {
    match (primary, secondary) {
        (Axis::I, Axis::A) => Some("Your blend of logic and creativity makes you an innovator."),
        (Axis::R, Axis::I) => Some("You have a scientific mind with practical hands-on skills."),
        (Axis::E, Axis::S) => Some("You are a charismatic leader who truly cares about people."),
        _ => None,
    }
}

/// Clause appended for Organizer profiles with a strong government-stability
/// signal. Gated on the Govt trait total, not the secondary axis.
pub const GOVT_STABILITY_CLAUSE: &str =
    "You value stability and would thrive in structured roles like Government services.";

/// Headline strength shown on the result card and passed into pathway
/// generation prompts.
pub fn strength(axis: Axis) -> &'static str {
    match axis {
        Axis::R => "Practical Skills",
        Axis::I => "Analytical Thinking",
        Axis::A => "Creativity",
        Axis::S => "Empathy",
        Axis::E => "Leadership",
        Axis::C => "Organization",
    }
}

/// Suggested learning style. Only R and A map to distinct styles.
pub fn learning_style(axis: Axis) -> &'static str {
    match axis {
        Axis::R => "Kinesthetic (Doing)",
        Axis::A => "Visual",
        Axis::I | Axis::S | Axis::E | Axis::C => "Logical",
    }
}
