use super::QuestionGenerator;
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use async_trait::async_trait;
use tracing::{error, info};

pub const QUESTION_MODEL: &str = "gpt-3.5-turbo";
pub const QUESTION_TEMPERATURE: f32 = 0.7;
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates engaging questions about a given topic.";

pub fn user_prompt(topic: &str) -> String {
    format!(
        "Generate 4 thought-provoking questions about {topic}. Return only the questions, one per line."
    )
}

/// Splits model output into questions, one per line.
///
/// Only the text as a whole is trimmed; lines are kept verbatim, so the count
/// follows whatever the model returned.
pub fn parse_questions(content: &str) -> Vec<String> {
    content.trim().split('\n').map(str::to_string).collect()
}

pub struct LiveGenerator {
    llm_client: Box<dyn LlmClient>,
}

impl LiveGenerator {
    pub fn new(llm_client: Box<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    fn build_request(topic: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: QUESTION_MODEL.to_string(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_prompt(topic))],
            temperature: Some(QUESTION_TEMPERATURE),
        }
    }
}

#[async_trait]
impl QuestionGenerator for LiveGenerator {
    async fn generate(&self, topic: &str) -> Result<Vec<String>> {
        info!("Attempting to generate questions about: {}", topic);

        let response = match self
            .llm_client
            .create_chat_completion(Self::build_request(topic))
            .await
        {
            Ok(response) => response,
            Err(e @ Error::Authentication(_)) => {
                error!("Authentication error: {}", e);
                return Err(e);
            }
            Err(e) => {
                error!("Error generating questions: {}", e);
                return Err(e);
            }
        };

        let content = response.first_content().ok_or_else(|| {
            error!("Chat completion {} returned no choices", response.id);
            Error::upstream("Upstream response contained no choices")
        })?;

        let questions = parse_questions(content);
        info!("Successfully generated {} questions", questions.len());

        Ok(questions)
    }
}
