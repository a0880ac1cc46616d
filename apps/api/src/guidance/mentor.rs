//! Mentor chat — multi-turn career counselling. The transcript lives on the
//! client; each request carries the prior turns.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::ai_client::prompts::MENTOR_SYSTEM;
use crate::ai_client::{ChatRole, ChatTurn, GeminiClient};
use crate::guidance::fallbacks::MENTOR_FALLBACK_REPLY;

/// A transcript message as displayed by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChatMessage {
    pub fn model_reply(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Model,
            text,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Generates the mentor's reply to a message given prior turns. A failed
/// call becomes a friendly retry message, never an error.
pub async fn generate_mentor_reply(
    history: &[ChatTurn],
    message: &str,
    ai: &GeminiClient,
) -> String {
    match ai.call_with_history(history, message, MENTOR_SYSTEM).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Mentor chat generation failed: {e}");
            MENTOR_FALLBACK_REPLY.to_string()
        }
    }
}
