#![allow(dead_code)]

//! Saved-career list — bounded, ordered, duplicate-free, mutated only
//! through the toggle operation.

use serde::{Deserialize, Serialize};

/// Maximum number of careers a student can keep saved.
pub const MAX_SAVED: usize = 5;

/// Insertion-ordered save list with strict FIFO eviction. Re-saving a
/// previously evicted career is brand-new: it goes to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedCareers(Vec<String>);

impl SavedCareers {
    /// Toggles a career id: removes it if present (remaining order
    /// unchanged), otherwise appends it, evicting from the front until the
    /// list fits. Any string id is accepted; catalog membership is the
    /// caller's concern.
    pub fn toggle(&mut self, career_id: &str) {
        if let Some(pos) = self.0.iter().position(|id| id == career_id) {
            self.0.remove(pos);
            return;
        }

        self.0.push(career_id.to_string());
        while self.0.len() > MAX_SAVED {
            self.0.remove(0);
        }
    }

    pub fn contains(&self, career_id: &str) -> bool {
        self.0.iter().any(|id| id == career_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
