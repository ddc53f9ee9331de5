//! Chat-completions client for the feedback narrator.
//!
//! One blocking request per failed check, no retries and no queueing: a
//! narrator failure is local to a single interaction and the exercise keeps
//! running on canned feedback.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{EmpiricalParams, FitScore, NarratorConfig, UserEstimate};
use crate::error::AppError;
use crate::narrator::prompt::build_messages;

const BASE_URL: &str = "https://api.openai.com/v1";

/// Message in a chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

pub struct NarratorClient {
    client: Client,
    api_key: String,
    config: NarratorConfig,
}

impl NarratorClient {
    /// Build a client from the environment (`.env` supported).
    ///
    /// A missing `OPENAI_API_KEY` is a configuration error the front-ends
    /// surface without aborting the exercise.
    pub fn from_env(config: NarratorConfig) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::usage("Missing OPENAI_API_KEY in environment (.env)."))?;
        Ok(Self {
            client: Client::new(),
            api_key,
            config,
        })
    }

    /// Turn a failed check into prose.
    ///
    /// The system prompt carries the empirical parameters and the coarse
    /// breach description; the user message carries only the learner's own
    /// inputs. The response text is returned verbatim.
    pub fn narrate(
        &self,
        estimate: UserEstimate,
        empirical: EmpiricalParams,
        score: &FitScore,
    ) -> Result<String, AppError> {
        let (system, user) = build_messages(estimate, empirical, score);
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::system(system), Message::user(user)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %request.model, "requesting narration");

        let resp = self
            .client
            .post(format!("{BASE_URL}/chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| AppError::narrator(format!("Narrator request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AppError::narrator(format!(
                "Narrator request failed with status {status}: {detail}"
            )));
        }

        let body: ChatCompletionResponse = resp
            .json()
            .map_err(|e| AppError::narrator(format!("Failed to parse narrator response: {e}")))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::narrator("Narrator response contained no choices."))?;

        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::narrator("Narrator returned empty text."));
        }

        debug!(chars = content.len(), "narration received");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_serializes_with_roles() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![Message::system("sys"), Message::user("usr")],
            max_tokens: 200,
            temperature: 0.2,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"role\":\"system\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"max_tokens\":200"));
    }

    #[test]
    fn response_parses_first_choice() {
        let json = r#"{"choices":[{"message":{"content":"Try widening the curve."}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "Try widening the curve."
        );
    }
}
