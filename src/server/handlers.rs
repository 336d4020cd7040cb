use super::types::{ErrorResponse, QuestionResponse, TopicRequest};
use crate::{Error, questions::QuestionGenerator};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::{path::PathBuf, sync::Arc};
use tracing::{error, warn};

type ErrorReply = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn QuestionGenerator>,
    pub index_path: Arc<PathBuf>,
}

fn error_reply(err: &Error) -> ErrorReply {
    (
        err.status_code(),
        Json(ErrorResponse {
            error: err.public_message(),
        }),
    )
}

pub async fn generate_questions(
    State(state): State<AppState>,
    Json(request): Json<TopicRequest>,
) -> Result<Json<QuestionResponse>, ErrorReply> {
    let Some(topic) = request.topic() else {
        warn!("Rejected question request without a topic");
        return Err(error_reply(&Error::no_topic()));
    };

    match state.generator.generate(&topic).await {
        Ok(questions) => Ok(Json(QuestionResponse { questions })),
        Err(e) => Err(error_reply(&e)),
    }
}

/// Serves the front-end page, read from disk on every request.
pub async fn home(State(state): State<AppState>) -> Result<Html<Vec<u8>>, ErrorReply> {
    match tokio::fs::read(state.index_path.as_path()).await {
        Ok(bytes) => Ok(Html(bytes)),
        Err(e) => {
            error!(
                "Failed to read index page {}: {}",
                state.index_path.display(),
                e
            );
            Err(error_reply(&Error::Io(e)))
        }
    }
}
