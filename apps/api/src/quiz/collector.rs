//! Response collector — accumulates one rating per survey statement while the
//! student works through the survey.
//!
//! Append/overwrite only: a single answer can be re-recorded but never
//! removed; restarting the survey clears everything.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::catalog::survey::{statement, STATEMENTS};

/// Mapping from statement id to rating. Partial during the survey; scoring
/// defaults missing entries to neutral, so a partial set is still scorable.
pub type ResponseSet = BTreeMap<u16, u8>;

/// Invalid caller input to the collector. Surfaced immediately — a bad id or
/// rating is a programming error in the caller, not a data-quality issue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurveyError {
    #[error("unknown statement id {0}")]
    UnknownStatement(u16),

    #[error("rating {0} out of range, expected 1-5")]
    RatingOutOfRange(u8),
}

#[derive(Debug, Clone, Default)]
pub struct ResponseCollector {
    answers: ResponseSet,
}

impl ResponseCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or overwrites the rating for a statement.
    pub fn record_answer(&mut self, statement_id: u16, rating: u8) -> Result<(), SurveyError> {
        if !(1..=5).contains(&rating) {
            return Err(SurveyError::RatingOutOfRange(rating));
        }
        if statement(statement_id).is_none() {
            return Err(SurveyError::UnknownStatement(statement_id));
        }
        self.answers.insert(statement_id, rating);
        Ok(())
    }

    /// True once every catalog statement has a recorded rating.
    pub fn is_complete(&self) -> bool {
        STATEMENTS.iter().all(|s| self.answers.contains_key(&s.id))
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Clears all recorded answers (survey restart).
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.answers
    }
}
