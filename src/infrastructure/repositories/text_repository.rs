use async_trait::async_trait;

/// Generative text provider used for summaries and lyrics
#[async_trait]
pub trait TextRepository: Send + Sync {
    /// Complete `user_prompt` under `system_prompt`, returning the reply text
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, String>;
}
