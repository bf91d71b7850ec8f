use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    config::ModelConfig,
    errors::{AppError, AppResult},
};

/// Turns a prompt into model text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Conversation with an OpenAI-compatible chat model.
///
/// The session owns its history. Each turn holds the history lock from the
/// moment the prompt is appended until the reply is recorded, so concurrent
/// callers are serialized and never interleave their turns. A failed turn
/// leaves the history as it was before the call.
pub struct ChatSession {
    client: Client<OpenAIConfig>,
    settings: ModelConfig,
    history: Mutex<Vec<ChatMessage>>,
}

impl ChatSession {
    pub fn new(settings: ModelConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(settings.api_key.expose_secret())
            .with_api_base(settings.api_base.clone());

        Self {
            client: Client::with_config(openai_config),
            settings,
            history: Mutex::new(Vec::new()),
        }
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().await.clone()
    }

    pub async fn reset(&self) {
        self.history.lock().await.clear();
        log::info!("Chat session history cleared");
    }

    async fn complete(&self, messages: &[ChatMessage]) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: &self.settings.model_name,
            messages,
            temperature: self.settings.temperature,
            top_p: self.settings.top_p,
            max_tokens: self.settings.max_output_tokens,
        };

        let response: Result<ChatCompletionResponse, OpenAIError> =
            self.client.chat().create_byot(request).await;

        let text = response?
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::GenerationError(
                "Model returned an empty response".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for ChatSession {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let mut history = self.history.lock().await;
        history.push(ChatMessage::user(prompt));
        trim_history(&mut history, self.settings.history_limit);

        log::debug!(
            "Sending prompt to {} with {} history messages",
            self.settings.model_name,
            history.len()
        );

        match self.complete(&history).await {
            Ok(text) => {
                history.push(ChatMessage::assistant(text.clone()));
                Ok(text)
            }
            Err(e) => {
                history.pop();
                log::error!("Text generation failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Drops the oldest messages until at most `limit` remain, never leaving an
/// assistant reply at the front without its prompt. A limit of 0 keeps all.
fn trim_history(history: &mut Vec<ChatMessage>, limit: usize) {
    if limit == 0 || history.len() <= limit {
        return;
    }

    let mut excess = history.len() - limit;
    while history
        .get(excess)
        .is_some_and(|m| m.role == ChatRole::Assistant)
    {
        excess += 1;
    }
    history.drain(..excess);
}
