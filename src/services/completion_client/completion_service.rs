use super::types::{
    chat_completion::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage},
    completion_service_error::CompletionServiceError,
};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f32 = 0.7;

#[derive(Clone)]
pub struct CompletionServiceConfig {
    pub api_key: String,
    pub host: String,
    pub model: String,
}

#[derive(Clone)]
pub struct CompletionService {
    config: CompletionServiceConfig,
    client: reqwest::Client,
}

impl CompletionService {
    pub fn new(config: CompletionServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Sends `prompt` as a single user turn and returns the trimmed text of the
    /// first choice.
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionServiceError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            n: 1,
            temperature: TEMPERATURE,
        };

        let resp = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.host))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                CompletionServiceError::Upstream(format!("Failed to send request: {}", e))
            })?;

        let body = resp.json::<ChatCompletionResponse>().await.map_err(|e| {
            CompletionServiceError::Upstream(format!("Failed to get response body: {}", e))
        })?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(CompletionServiceError::EmptyCompletion)
    }
}
