//! Question generation: the demo templates and the live chat-completion path
//! behind one [`QuestionGenerator`] capability.

mod demo;
mod live;

pub use demo::DemoGenerator;
pub use live::{
    LiveGenerator, QUESTION_MODEL, QUESTION_TEMPERATURE, SYSTEM_PROMPT, parse_questions,
    user_prompt,
};

use crate::{
    Result,
    config::{Config, Mode},
    llm::OpenAiClient,
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Produces questions about `topic`, which the caller has already checked is non-empty.
    async fn generate(&self, topic: &str) -> Result<Vec<String>>;
}

/// Builds the generator selected by `config.mode`.
pub fn from_config(config: &Config) -> Arc<dyn QuestionGenerator> {
    match config.mode {
        Mode::Demo => Arc::new(DemoGenerator),
        Mode::Live => Arc::new(LiveGenerator::new(Box::new(OpenAiClient::new(
            config.llm.clone(),
        )))),
    }
}
