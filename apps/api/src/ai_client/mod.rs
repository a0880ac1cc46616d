/// AI client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the generative API directly.
/// All AI interactions MUST go through this module, so every caller inherits
/// the same retry policy and error taxonomy.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const API_URL_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generative calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("model returned empty content")]
    EmptyContent,
}

/// One turn of mentor-chat history, client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

// Request body ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "google_search")]
    google_search: serde_json::Value,
}

// Response body ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    #[serde(rename = "groundingMetadata")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

/// A web source backing a search-grounded answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSource {
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let parts = &candidate.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Web sources from search grounding, if the call used the search tool.
    pub fn sources(&self) -> Vec<WebSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single Gemini client used by all services.
/// Wraps the generateContent API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Multi-turn generation over a chat history plus the new user message.
    /// A single-turn call is just an empty history.
    pub async fn call_with_history(
        &self,
        history: &[ChatTurn],
        message: &str,
        system: &str,
    ) -> Result<String, AiError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: turn.role.as_str(),
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();
        contents.push(user_content(message));

        let request = self.build_request(contents, Some(system), false, false);
        let response = self.send_with_retry(&request).await?;
        response.text().ok_or(AiError::EmptyContent)
    }

    /// Convenience method that forces a JSON response and deserializes it.
    /// The prompt must describe the expected shape.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, AiError> {
        let request = self.build_request(vec![user_content(prompt)], Some(system), true, false);
        let response = self.send_with_retry(&request).await?;
        let text = response.text().ok_or(AiError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them anyway.
        let text = strip_json_fences(&text);

        serde_json::from_str(text).map_err(AiError::Parse)
    }

    /// Search-grounded generation: returns the text plus its web sources.
    /// JSON response mode cannot be combined with tools, so callers parse
    /// the text themselves when they need structure.
    pub async fn call_with_search(&self, prompt: &str) -> Result<(String, Vec<WebSource>), AiError> {
        let request = self.build_request(vec![user_content(prompt)], None, false, true);
        let response = self.send_with_retry(&request).await?;
        let text = response.text().ok_or(AiError::EmptyContent)?;
        Ok((text, response.sources()))
    }

    fn build_request(
        &self,
        contents: Vec<Content>,
        system: Option<&str>,
        json_response: bool,
        with_search: bool,
    ) -> GenerateRequest {
        GenerateRequest {
            contents,
            system_instruction: system.map(|s| SystemInstruction {
                parts: vec![Part {
                    text: s.to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type: json_response.then_some("application/json"),
            },
            tools: if with_search {
                vec![Tool {
                    google_search: serde_json::json!({}),
                }]
            } else {
                vec![]
            },
        }
    }

    /// Posts the request, retrying on 429 and 5xx with exponential backoff.
    async fn send_with_retry(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AiError> {
        let url = format!("{API_URL_BASE}/{MODEL}:generateContent");
        let mut last_error: Option<AiError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "AI call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .header("content-type", "application/json")
                .json(request)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AiError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("AI API returned {}: {}", status, body);
                last_error = Some(AiError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(AiError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let generate_response: GenerateResponse = response.json().await?;
            debug!("AI call succeeded ({} candidates)", generate_response.candidates.len());
            return Ok(generate_response);
        }

        Err(last_error.unwrap_or(AiError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

fn user_content(prompt: &str) -> Content {
    Content {
        role: "user",
        parts: vec![Part {
            text: prompt.to_string(),
        }],
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Extracts the outermost JSON array from model output that may carry prose
/// around it. Search-grounded calls cannot force JSON mode, so this is the
/// robust path for list-shaped answers.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let cleaned = strip_json_fences(text);
    let start = cleaned.find('[')?;
    let end = cleaned.rfind(']')?;
    (start < end).then(|| &cleaned[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_array_with_surrounding_prose() {
        let input = "Here are the results:\n[{\"a\":1},{\"a\":2}]\nHope this helps!";
        assert_eq!(extract_json_array(input), Some("[{\"a\":1},{\"a\":2}]"));
    }

    #[test]
    fn test_extract_json_array_inside_fences() {
        let input = "```json\n[1,2,3]\n```";
        assert_eq!(extract_json_array(input), Some("[1,2,3]"));
    }

    #[test]
    fn test_extract_json_array_absent() {
        assert_eq!(extract_json_array("no array here"), None);
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "Hello world");
    }

    #[test]
    fn test_response_sources_from_grounding() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "update"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://example.in/news", "title": "Example"}},
                        {"web": null}
                    ]
                }
            }]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let sources = response.sources();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].uri, "https://example.in/news");
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(response.text().is_none());
        assert!(response.sources().is_empty());
    }
}
