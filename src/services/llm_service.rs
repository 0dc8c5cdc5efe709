use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A hosted text-generation model: prompt in, generated text out.
///
/// Every call is a single attempt; failures surface immediately to the
/// handler that made the request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: String) -> Result<String, GenerationError>;
}

/// Vertex AI `generateContent` request/response structures (only the
/// fields we use).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: usize,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
    total_token_count: Option<u32>,
}

/// Text generation via a hosted Vertex AI model.
pub struct VertexAiGenerator {
    endpoint: String,
    access_token: String,
    model: String,
    max_output_tokens: usize,
    temperature: f32,
    client: Client,
}

impl VertexAiGenerator {
    pub fn new(
        project: &str,
        location: &str,
        access_token: String,
        model: String,
        max_output_tokens: usize,
        temperature: f32,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let endpoint = format!(
            "https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent"
        );

        Self {
            endpoint,
            access_token,
            model,
            max_output_tokens,
            temperature,
            client,
        }
    }
}

#[async_trait]
impl TextGenerator for VertexAiGenerator {
    async fn generate(&self, prompt: String) -> Result<String, GenerationError> {
        info!(
            "Generating completion (model: {}, max_output_tokens: {})",
            self.model, self.max_output_tokens
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Generation API returned HTTP {}: {}", status, error_text);
            return Err(GenerationError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        if let Some(usage) = &body.usage_metadata {
            info!(
                "Completion generated. Tokens: {} prompt + {} completion = {} total",
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0),
                usage.total_token_count.unwrap_or(0)
            );
        }

        let text = body
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .and_then(|candidate| candidate.content)
            .and_then(|mut content| {
                if content.parts.is_empty() {
                    None
                } else {
                    Some(content.parts.remove(0).text)
                }
            })
            .ok_or_else(|| {
                GenerationError::InvalidResponse("no candidate text in response".to_string())
            })?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_derived_from_project_and_location() {
        let generator = VertexAiGenerator::new(
            "demo-project",
            "asia-south1",
            "token".to_string(),
            "gemini-1.5-flash".to_string(),
            500,
            0.7,
        );

        assert_eq!(
            generator.endpoint,
            "https://asia-south1-aiplatform.googleapis.com/v1/projects/demo-project/locations/asia-south1/publishers/google/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn response_text_is_first_candidate_part() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Apple trades at $150."}]}}
            ],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 8, "totalTokenCount": 18}
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .unwrap()
            .remove(0)
            .content
            .unwrap()
            .parts
            .remove(0)
            .text;
        assert_eq!(text, "Apple trades at $150.");
    }

    #[test]
    fn empty_candidates_deserialize_cleanly() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_none());
        assert!(parsed.usage_metadata.is_none());
    }
}
