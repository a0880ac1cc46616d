#![allow(dead_code)]

//! Survey catalog — the fixed, ordered psychometric statement set.
//!
//! Every statement carries a RIASEC axis and a finer-grained trait. Both are
//! closed enums so a statement can never reference an axis or trait the
//! scoring rules don't know about.

use serde::Serialize;

/// One of the six RIASEC personality axes.
///
/// `ALL` doubles as the tie-break priority order: when two axis totals are
/// equal, the earlier-listed axis wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl Axis {
    pub const ALL: [Axis; 6] = [Axis::R, Axis::I, Axis::A, Axis::S, Axis::E, Axis::C];

    /// Single-letter code, as used in career Holland codes ("RIA", "IEC", ...).
    pub fn letter(self) -> char {
        match self {
            Axis::R => 'R',
            Axis::I => 'I',
            Axis::A => 'A',
            Axis::S => 'S',
            Axis::E => 'E',
            Axis::C => 'C',
        }
    }

    pub fn from_letter(c: char) -> Option<Axis> {
        match c {
            'R' => Some(Axis::R),
            'I' => Some(Axis::I),
            'A' => Some(Axis::A),
            'S' => Some(Axis::S),
            'E' => Some(Axis::E),
            'C' => Some(Axis::C),
            _ => None,
        }
    }
}

/// Fine-grained interest trait attached to each statement. Several traits map
/// onto one axis; the statement count per trait is itself a scoring signal
/// (totals are sums, not averages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trait {
    Math,
    Bio,
    Humanities,
    Commerce,
    Physics,
    Language,
    Vocational,
    Medical,
    Leadership,
    Govt,
    Creative,
    Research,
    Tech,
    Admin,
    Design,
    Defense,
    Finance,
    Logic,
    Nature,
    Ambition,
    Structure,
    Abstract,
    Empathy,
    Mechanics,
    Risk,
    Travel,
    Food,
    Teaching,
    Sports,
    Law,
    Agri,
}

impl Trait {
    pub const ALL: [Trait; 31] = [
        Trait::Math,
        Trait::Bio,
        Trait::Humanities,
        Trait::Commerce,
        Trait::Physics,
        Trait::Language,
        Trait::Vocational,
        Trait::Medical,
        Trait::Leadership,
        Trait::Govt,
        Trait::Creative,
        Trait::Research,
        Trait::Tech,
        Trait::Admin,
        Trait::Design,
        Trait::Defense,
        Trait::Finance,
        Trait::Logic,
        Trait::Nature,
        Trait::Ambition,
        Trait::Structure,
        Trait::Abstract,
        Trait::Empathy,
        Trait::Mechanics,
        Trait::Risk,
        Trait::Travel,
        Trait::Food,
        Trait::Teaching,
        Trait::Sports,
        Trait::Law,
        Trait::Agri,
    ];

    pub const COUNT: usize = Self::ALL.len();
}

/// A single survey statement. Immutable, defined at process start.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurveyStatement {
    pub id: u16,
    pub text: &'static str,
    pub axis: Axis,
    #[serde(rename = "trait")]
    pub trait_: Trait,
    /// Display-only grouping shown in the survey UI progress header.
    pub category: &'static str,
}

/// The full ordered statement set. Ids are stable; scoring and the response
/// collector both key off them.
pub const STATEMENTS: &[SurveyStatement] = &[
    // Section 1: subject aptitude
    SurveyStatement {
        id: 1,
        text: "I enjoy solving complex Math problems, equations, and using logic.",
        axis: Axis::I,
        trait_: Trait::Math,
        category: "Aptitude",
    },
    SurveyStatement {
        id: 2,
        text: "I am fascinated by Biology, human anatomy, plants, or how living things function.",
        axis: Axis::S,
        trait_: Trait::Bio,
        category: "Aptitude",
    },
    SurveyStatement {
        id: 3,
        text: "I enjoy History, Politics, Social Sciences, and understanding how society works.",
        axis: Axis::E,
        trait_: Trait::Humanities,
        category: "Aptitude",
    },
    SurveyStatement {
        id: 4,
        text: "I am good at managing Money, Accounts, and understanding Profit/Loss.",
        axis: Axis::C,
        trait_: Trait::Commerce,
        category: "Aptitude",
    },
    SurveyStatement {
        id: 5,
        text: "I understand Physics, mechanics, and how machines or electricity work.",
        axis: Axis::R,
        trait_: Trait::Physics,
        category: "Aptitude",
    },
    SurveyStatement {
        id: 6,
        text: "I love learning Languages, writing stories, or communicating ideas effectively.",
        axis: Axis::A,
        trait_: Trait::Language,
        category: "Aptitude",
    },
    // Section 2: work environment and goals
    SurveyStatement {
        id: 7,
        text: "I prefer 'Hands-on' work (fixing, building, crafting) over sitting at a desk.",
        axis: Axis::R,
        trait_: Trait::Vocational,
        category: "Work Style",
    },
    SurveyStatement {
        id: 8,
        text: "I want a job where I directly help people cure sickness or improve their lives.",
        axis: Axis::S,
        trait_: Trait::Medical,
        category: "Motivation",
    },
    SurveyStatement {
        id: 9,
        text: "I like leading teams, giving presentations, and influencing people.",
        axis: Axis::E,
        trait_: Trait::Leadership,
        category: "Social",
    },
    SurveyStatement {
        id: 10,
        text: "I prefer the stability and respect of a Government Job over private sector risks.",
        axis: Axis::C,
        trait_: Trait::Govt,
        category: "Stability",
    },
    SurveyStatement {
        id: 11,
        text: "I enjoy creative freedom (Design, Art, Music) and dislike strict rules.",
        axis: Axis::A,
        trait_: Trait::Creative,
        category: "Creativity",
    },
    SurveyStatement {
        id: 12,
        text: "I am willing to study for many years (like for MBBS/PhD/UPSC) to reach the top.",
        axis: Axis::I,
        trait_: Trait::Research,
        category: "Commitment",
    },
    // Section 3: specific interests
    SurveyStatement {
        id: 13,
        text: "I want to start earning quickly via a skilled trade (Electrician, Technician, etc.).",
        axis: Axis::R,
        trait_: Trait::Vocational,
        category: "Goals",
    },
    SurveyStatement {
        id: 14,
        text: "I am curious about Computers, Coding, AI, and how software is built.",
        axis: Axis::I,
        trait_: Trait::Tech,
        category: "Interest",
    },
    SurveyStatement {
        id: 15,
        text: "I like organizing data, files, schedules, and keeping things systematic.",
        axis: Axis::C,
        trait_: Trait::Admin,
        category: "Organization",
    },
    SurveyStatement {
        id: 16,
        text: "I enjoy visual arts, sketching, fashion, or editing videos.",
        axis: Axis::A,
        trait_: Trait::Design,
        category: "Interest",
    },
    SurveyStatement {
        id: 17,
        text: "I am physically fit and attracted to the Uniform/Discipline of Defense/Police.",
        axis: Axis::R,
        trait_: Trait::Defense,
        category: "Service",
    },
    SurveyStatement {
        id: 18,
        text: "I am interested in the Stock Market, Investments, and Business growth.",
        axis: Axis::E,
        trait_: Trait::Finance,
        category: "Interest",
    },
    // Section 4: personality and behavior
    SurveyStatement {
        id: 19,
        text: "I make decisions based on Logic and Data rather than emotions.",
        axis: Axis::I,
        trait_: Trait::Logic,
        category: "Personality",
    },
    SurveyStatement {
        id: 20,
        text: "I love animals, nature, and working outdoors.",
        axis: Axis::R,
        trait_: Trait::Nature,
        category: "Environment",
    },
    SurveyStatement {
        id: 21,
        text: "I am competitive and want a high-status, high-paying career.",
        axis: Axis::E,
        trait_: Trait::Ambition,
        category: "Motivation",
    },
    SurveyStatement {
        id: 22,
        text: "I prefer clear instructions and a routine; I don't like unexpected surprises.",
        axis: Axis::C,
        trait_: Trait::Structure,
        category: "Personality",
    },
    SurveyStatement {
        id: 23,
        text: "I often find myself daydreaming or thinking about abstract concepts.",
        axis: Axis::A,
        trait_: Trait::Abstract,
        category: "Personality",
    },
    SurveyStatement {
        id: 24,
        text: "I am a good listener and friends often come to me for advice.",
        axis: Axis::S,
        trait_: Trait::Empathy,
        category: "Personality",
    },
    SurveyStatement {
        id: 25,
        text: "I enjoy taking things apart (gadgets, toys) just to see how they work.",
        axis: Axis::R,
        trait_: Trait::Mechanics,
        category: "Curiosity",
    },
    SurveyStatement {
        id: 26,
        text: "I am comfortable taking risks if the reward is big (Business/Startup).",
        axis: Axis::E,
        trait_: Trait::Risk,
        category: "Personality",
    },
    // Section 5: niche and lifestyle
    SurveyStatement {
        id: 27,
        text: "I love traveling, seeing new places, and don't mind being away from home.",
        axis: Axis::E,
        trait_: Trait::Travel,
        category: "Lifestyle",
    },
    SurveyStatement {
        id: 28,
        text: "I enjoy cooking, baking, or experimenting with food.",
        axis: Axis::R,
        trait_: Trait::Food,
        category: "Interest",
    },
    SurveyStatement {
        id: 29,
        text: "I like explaining things to others and helping them understand new concepts.",
        axis: Axis::S,
        trait_: Trait::Teaching,
        category: "Skill",
    },
    // Section 6: targeted
    SurveyStatement {
        id: 30,
        text: "I am passionate about sports, fitness, or athletic training.",
        axis: Axis::R,
        trait_: Trait::Sports,
        category: "Interest",
    },
    SurveyStatement {
        id: 31,
        text: "I enjoy debating, arguing for a cause, or understanding the law.",
        axis: Axis::E,
        trait_: Trait::Law,
        category: "Interest",
    },
    SurveyStatement {
        id: 32,
        text: "I am interested in agriculture, farming techniques, and nature conservation.",
        axis: Axis::R,
        trait_: Trait::Agri,
        category: "Interest",
    },
];

/// Looks up a statement by id. Ids are not guaranteed contiguous, so this is
/// a scan over the (small, fixed) table.
pub fn statement(id: u16) -> Option<&'static SurveyStatement> {
    STATEMENTS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_statement_ids_are_unique() {
        let ids: HashSet<u16> = STATEMENTS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), STATEMENTS.len());
    }

    #[test]
    fn test_every_axis_is_represented() {
        for axis in Axis::ALL {
            assert!(
                STATEMENTS.iter().any(|s| s.axis == axis),
                "no statement for axis {axis:?}"
            );
        }
    }

    #[test]
    fn test_vocational_is_the_only_double_weighted_trait() {
        // Two hands-on statements feed Vocational; every other trait has
        // exactly one. The >=8 vocational threshold depends on this.
        for t in Trait::ALL {
            let count = STATEMENTS.iter().filter(|s| s.trait_ == t).count();
            if t == Trait::Vocational {
                assert_eq!(count, 2);
            } else {
                assert_eq!(count, 1, "trait {t:?} has {count} statements");
            }
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(statement(14).unwrap().trait_, Trait::Tech);
        assert!(statement(99).is_none());
    }

    #[test]
    fn test_axis_letter_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_letter(axis.letter()), Some(axis));
        }
        assert_eq!(Axis::from_letter('X'), None);
    }
}
