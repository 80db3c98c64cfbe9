/// LLM Client — the single point of entry for all calls to the external extraction model.
///
/// ARCHITECTURAL RULE: No other module may call the Chat Completions API directly.
/// All LLM interactions MUST go through this module.
///
/// Calls are single-shot. There is no retry loop; the only bound is the request timeout.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub(crate) mod mock;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl LlmResponse {
    /// Extracts the message text of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client used by the service.
/// Wraps an OpenAI-compatible Chat Completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a single call to the Chat Completions API, returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            // Try to parse error message
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the LLM and returns the trimmed text of the first choice.
    pub async fn call_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{completion_body, MockLlm};
    use super::*;
    use axum::http::StatusCode;

    fn client_for(base_url: &str) -> LlmClient {
        LlmClient::new(
            "test-key".to_string(),
            base_url.to_string(),
            "gpt-4".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_response_text_reads_first_choice() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "{}"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2}
        }"#;
        let response: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("{}"));
    }

    #[test]
    fn test_response_without_choices_has_no_text() {
        let response: LlmResponse = serde_json::from_str(r#"{"usage": null}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = client_for("http://localhost:1234/v1/");
        assert_eq!(client.base_url, "http://localhost:1234/v1");
        assert_eq!(client.model(), "gpt-4");
    }

    #[tokio::test]
    async fn test_call_text_sends_system_and_user_messages() {
        let mock = MockLlm::spawn(StatusCode::OK, completion_body("  {\"a\": 1}\n")).await;
        let client = client_for(&mock.base_url);

        let text = client.call_text("the prompt", "the system").await.unwrap();
        assert_eq!(text, "{\"a\": 1}");

        let request = mock.last_request().expect("request recorded");
        assert_eq!(request["model"], "gpt-4");
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(request["messages"][0]["content"], "the system");
        assert_eq!(request["messages"][1]["role"], "user");
        assert_eq!(request["messages"][1]["content"], "the prompt");
        assert_eq!(mock.last_auth().as_deref(), Some("Bearer test-key"));
    }

    #[tokio::test]
    async fn test_api_error_message_is_surfaced() {
        let body = r#"{"error": {"message": "invalid api key"}}"#.to_string();
        let mock = MockLlm::spawn(StatusCode::UNAUTHORIZED, body).await;
        let client = client_for(&mock.base_url);

        match client.call_text("p", "s").await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mock = MockLlm::spawn(StatusCode::SERVICE_UNAVAILABLE, "down".to_string()).await;
        let client = client_for(&mock.base_url);

        assert!(matches!(
            client.call_text("p", "s").await,
            Err(LlmError::Api { status: 503, .. })
        ));
        assert_eq!(mock.hits(), 1);
    }

    #[tokio::test]
    async fn test_blank_content_is_empty_content_error() {
        let mock = MockLlm::spawn(StatusCode::OK, completion_body("   ")).await;
        let client = client_for(&mock.base_url);

        assert!(matches!(
            client.call_text("p", "s").await,
            Err(LlmError::EmptyContent)
        ));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_parse_error() {
        let mock = MockLlm::spawn(StatusCode::OK, "<html>".to_string()).await;
        let client = client_for(&mock.base_url);

        assert!(matches!(
            client.call("p", "s").await,
            Err(LlmError::Parse(_))
        ));
    }
}
