use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

use crate::config::AppConfig;
use crate::error::AppError;

/// Handle on the configured completion provider. Credential and model id are
/// fixed at startup; an agent is built per call, preamble included.
#[derive(Clone)]
pub struct CompletionInvoker {
    api_key: String,
    model: String,
}

impl CompletionInvoker {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Submit one system + user message pair and return the model's text.
    /// No retry, no fallback; transport and auth failures propagate.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, AppError> {
        let client = openai::Client::new(&self.api_key);
        let agent = client.agent(&self.model).preamble(system).build();
        let response = agent.prompt(user).await?;
        Ok(response)
    }
}
