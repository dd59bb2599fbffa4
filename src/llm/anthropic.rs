use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::errors::LlmPingError;
use super::provider::CompletionProvider;
use super::types::{CompletionReply, CompletionRequest, Message};

/// Fixed model identifier and token bound, matching the smoke-test script
/// this tool replaces.
const MODEL: &str = "claude-3-opus-20240229";
const MAX_TOKENS: u32 = 1000;

const API_VERSION: &str = "2023-06-01";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    auth_token: String,
    timeout: Duration,
}

impl AnthropicProvider {
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(config: &Config, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
            timeout,
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    async fn complete(&self, prompt: &str) -> Result<CompletionReply, LlmPingError> {
        let request = CompletionRequest {
            model: MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message::user(prompt)],
        };

        debug!(model = MODEL, base_url = %self.base_url, "Sending completion request");

        let resp = self.client
            .post(format!("{}/v1/messages", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmPingError::Network(format!("request timed out: {}", e))
                } else {
                    LlmPingError::Network(format!("request failed: {}", e))
                }
            })?;

        let status = resp.status();
        if status == 401 || status == 403 {
            return Err(LlmPingError::Authentication(
                "service rejected the bearer token".into(),
            ));
        }
        if status == 429 {
            return Err(LlmPingError::RateLimit("rate limit exceeded".into()));
        }

        let data: Value = resp.json().await.map_err(|e| {
            LlmPingError::MalformedResponse(format!("failed to parse response body: {}", e))
        })?;

        if let Some(error) = data.get("error") {
            let msg = error["message"].as_str().unwrap_or("unknown error");
            return Err(LlmPingError::Api(msg.to_string()));
        }
        if !status.is_success() {
            return Err(LlmPingError::Api(format!("service returned HTTP {}", status)));
        }

        let content = data["content"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                LlmPingError::MalformedResponse("response contains no content blocks".into())
            })?
            .to_string();

        let input_tokens = data["usage"]["input_tokens"].as_u64();
        let output_tokens = data["usage"]["output_tokens"].as_u64();
        let model = data["model"].as_str().unwrap_or(MODEL).to_string();

        debug!(model = %model, input_tokens, output_tokens, "Completion received");

        Ok(CompletionReply { content, input_tokens, output_tokens, model })
    }

    fn provider_name(&self) -> &str { "anthropic" }
    fn model_name(&self) -> &str { MODEL }
}
