//! Career catalog — read-only reference data the scoring engine ranks against.
//!
//! Records are deserialized once at startup from an embedded JSON document.
//! `Industry` is a closed enum so the industry→stream mapping and the scoring
//! rules can match exhaustively; tags, skills, and subjects stay open string
//! sets (they are catalog vocabulary, not engine vocabulary).

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::survey::Axis;

/// Closed set of career industries. Adding a catalog record with a new
/// industry requires extending this enum, which forces the stream mapping
/// and any industry-gated rule to take a position on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    Technology,
    Engineering,
    Healthcare,
    Finance,
    Business,
    Legal,
    Humanities,
    Social,
    Media,
    Govt,
    Defense,
    Creative,
    Aviation,
    Logistics,
    Vocational,
    Sports,
    Education,
    Agriculture,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Serde names double as display names for cluster output.
        write!(f, "{self:?}")
    }
}

/// A single career record. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    pub industry: Industry,
    pub description: String,
    /// Free-text salary string, e.g. "₹4–12 LPA". Currency/period encoding is
    /// deliberately loose; this is display-only.
    pub salary_range: String,
    pub education: String,
    pub growth_score: u8,
    pub tags: Vec<String>,
    pub skills: Vec<String>,
    pub subjects: Vec<String>,
    /// Holland code, e.g. "RIA". The first letter is the career's primary axis.
    pub personality_type: String,
}

impl CareerRecord {
    /// Primary RIASEC axis from the Holland code's first letter.
    /// Records with a malformed code simply never match the axis rule.
    pub fn primary_axis(&self) -> Option<Axis> {
        self.personality_type.chars().next().and_then(Axis::from_letter)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse career catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate career id '{0}' in catalog")]
    DuplicateId(String),
}

/// The loaded catalog. Order is the catalog's ranking tie-break order, so it
/// is preserved exactly as authored.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<CareerRecord>,
}

const EMBEDDED_CATALOG: &str = include_str!("../../data/careers.json");

impl CareerCatalog {
    /// Loads the catalog embedded in the binary. Called once at startup.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let careers: Vec<CareerRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for career in &careers {
            if !seen.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateId(career.id.clone()));
            }
        }

        Ok(Self { careers })
    }

    #[cfg(test)]
    pub fn from_records(careers: Vec<CareerRecord>) -> Self {
        Self { careers }
    }

    pub fn all(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn get(&self, id: &str) -> Option<&CareerRecord> {
        self.careers.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}
