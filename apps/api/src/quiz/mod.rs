// Career-matching engine: response collection, deterministic scoring, and
// personality classification. Pure and synchronous; the handlers are the
// only async surface.

pub mod collector;
pub mod constants;
pub mod handlers;
pub mod personality;
pub mod result;
pub mod scoring;
