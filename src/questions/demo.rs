use super::QuestionGenerator;
use crate::Result;
use async_trait::async_trait;

/// Fills four fixed templates with the topic. Never calls out.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoGenerator;

impl DemoGenerator {
    pub fn questions(topic: &str) -> Vec<String> {
        vec![
            format!("What are the most significant developments in {topic} technology in recent years?"),
            format!("How do you think {topic} will evolve in the next decade?"),
            format!("What are the biggest challenges facing the {topic} industry today?"),
            format!("How has {topic} impacted society and daily life?"),
        ]
    }
}

#[async_trait]
impl QuestionGenerator for DemoGenerator {
    async fn generate(&self, topic: &str) -> Result<Vec<String>> {
        Ok(Self::questions(topic))
    }
}
