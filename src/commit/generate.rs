//! Chat-completion client for commit message generation.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::GenerateError;

/// Fixed identifying headers attached to every generation request.
const REFERER_VALUE: &str = "https://github.com/aveline-dev/quill";
const TITLE_VALUE: &str = "quill";

/// Something that can turn a prompt into a commit message.
///
/// The refinement loop drives this seam, so tests can script responses
/// without a network.
#[async_trait]
pub trait MessageSource {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Generator backed by an OpenAI-compatible chat-completion endpoint.
#[derive(Debug)]
pub struct MessageGenerator {
    client: reqwest::Client,
    headers: HeaderMap,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl MessageGenerator {
    /// Build a generator. The API key is validated here, before any diff
    /// collection or side effect has happened.
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Result<Self, GenerateError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|_| GenerateError::InvalidApiKey)?,
        );
        headers.insert("HTTP-Referer", HeaderValue::from_static(REFERER_VALUE));
        headers.insert("X-Title", HeaderValue::from_static(TITLE_VALUE));

        Ok(Self {
            client: reqwest::Client::new(),
            headers,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl MessageSource for MessageGenerator {
    /// One model call, no automatic retry: regenerating is exclusively a
    /// user decision in the refinement menu.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!("requesting completion from {url} with model {}", self.model);

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(&json!({
                "model": self.model,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .send()
            .await
            .map_err(GenerateError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read error response".to_string());
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(GenerateError::Network)?;
        let Some(choice) = parsed.choices.into_iter().next() else {
            return Err(GenerateError::NoChoices);
        };

        let text = choice.message.content.trim().to_string();
        if text.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_that_cannot_be_sent_as_headers() {
        let err = MessageGenerator::new("bad\nkey", "https://example.test/v1", "model")
            .expect_err("newline in key must be rejected");
        assert!(matches!(err, GenerateError::InvalidApiKey));
    }

    #[test]
    fn trailing_slash_on_base_url_is_normalized() {
        let generator =
            MessageGenerator::new("key", "https://example.test/v1/", "model").expect("generator");
        assert_eq!(generator.base_url, "https://example.test/v1");
    }
}
