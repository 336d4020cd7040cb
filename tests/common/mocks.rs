use async_trait::async_trait;
use question_service::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
    questions::QuestionGenerator,
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<Error>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_content(self, content: &str) -> Self {
        self.add_response(text_response(content));
        self
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    pub fn add_response(&self, response: ChatCompletionResponse) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(error.clone());
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-choice completion carrying `content`.
pub fn text_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-mock".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("Stop".to_string()),
        }],
    }
}

/// Generator that records topics and returns a fixed outcome.
#[derive(Debug, Clone)]
pub struct MockQuestionGenerator {
    pub topics: Arc<Mutex<Vec<String>>>,
    pub outcome: std::result::Result<Vec<String>, Error>,
}

impl MockQuestionGenerator {
    pub fn returning(questions: Vec<&str>) -> Self {
        Self {
            topics: Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(questions.into_iter().map(str::to_string).collect()),
        }
    }

    pub fn failing(error: Error) -> Self {
        Self {
            topics: Arc::new(Mutex::new(Vec::new())),
            outcome: Err(error),
        }
    }

    pub fn get_topics(&self) -> Vec<String> {
        self.topics.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionGenerator for MockQuestionGenerator {
    async fn generate(&self, topic: &str) -> Result<Vec<String>> {
        self.topics.lock().unwrap().push(topic.to_string());
        self.outcome.clone()
    }
}
