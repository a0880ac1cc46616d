// Static reference data: the survey statement set and the career catalog.
// Both are immutable after startup; the scoring engine reads them only.

pub mod careers;
pub mod handlers;
pub mod survey;
