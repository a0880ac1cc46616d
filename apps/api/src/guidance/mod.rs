//! Guidance features built on the AI collaborator: pathway generation,
//! mentor chat, live news, scholarship discovery, and project ideas.
//!
//! Every feature degrades to static fallback content when the collaborator
//! is unavailable — a failed generation must never dead-end the student.

pub mod fallbacks;
pub mod handlers;
pub mod mentor;
pub mod news;
pub mod pathway;
pub mod projects;
pub mod scholarships;
