//! Live career news digest, grounded via the search tool.

use serde::Serialize;
use tracing::warn;

use crate::ai_client::prompts::NEWS_PROMPT_TEMPLATE;
use crate::ai_client::{GeminiClient, WebSource};
use crate::guidance::fallbacks::FALLBACK_NEWS_TEXT;

#[derive(Debug, Clone, Serialize)]
pub struct NewsDigest {
    pub text: String,
    pub sources: Vec<WebSource>,
}

impl NewsDigest {
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_NEWS_TEXT.to_string(),
            sources: Vec::new(),
        }
    }
}

/// Fetches a live news digest. The current date is interpolated to force
/// fresh results out of the search grounding. Static digest on failure.
pub async fn fetch_news(ai: &GeminiClient) -> NewsDigest {
    let now = chrono::Utc::now();
    let date = now.format("%A, %-d %B %Y %H:%M UTC").to_string();
    let prompt = NEWS_PROMPT_TEMPLATE.replace("{date}", &date);

    match ai.call_with_search(&prompt).await {
        Ok((text, sources)) => NewsDigest { text, sources },
        Err(e) => {
            warn!("News fetch failed, serving static digest: {e}");
            NewsDigest::fallback()
        }
    }
}
