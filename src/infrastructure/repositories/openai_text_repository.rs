use super::text_repository::TextRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat-completions implementation of the text repository
pub struct OpenAiTextRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    max_tokens: u32,
}

impl OpenAiTextRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, max_tokens: u32) -> Self {
        Self {
            client,
            model,
            max_tokens,
        }
    }
}

#[async_trait]
impl TextRepository for OpenAiTextRepository {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .max_tokens(self.max_tokens)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()
                    .map_err(|e| format!("Invalid system prompt: {}", e))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()
                    .map_err(|e| format!("Invalid user prompt: {}", e))?
                    .into(),
            ])
            .build()
            .map_err(|e| format!("Invalid chat request: {}", e))?;

        tracing::info!(
            model = %self.model,
            prompt_length = user_prompt.len(),
            "Calling OpenAI chat completion"
        );

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "OpenAI chat completion failed");
            format!("OpenAI chat error: {}", e)
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "OpenAI returned no completion".to_string())?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            completion_length = content.len(),
            "Chat completion received"
        );

        Ok(content)
    }
}
