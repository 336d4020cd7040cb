use async_openai::error::OpenAIError;
use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to callers when the upstream API rejects the credential.
pub const INVALID_API_KEY_MESSAGE: &str = "Invalid API key. Please check your OpenAI API key.";

/// Message returned to callers when a request carries no usable topic.
pub const NO_TOPIC_MESSAGE: &str = "No topic provided";

/// Closed classification of request failures, mapped to HTTP at the server edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Upstream,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("{0}")]
    Upstream(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Clone for Error {
    fn clone(&self) -> Self {
        match self {
            Self::Config(s) => Self::Config(s.clone()),
            Self::Validation(s) => Self::Validation(s.clone()),
            Self::Authentication(s) => Self::Authentication(s.clone()),
            Self::Upstream(s) => Self::Upstream(s.clone()),
            // For errors that can't be cloned, convert to string representation
            Self::Yaml(e) => Self::Config(format!("YAML error: {}", e)),
            Self::Io(e) => Self::Upstream(format!("IO error: {}", e)),
            Self::AddrParse(e) => Self::Config(format!("Address parse error: {}", e)),
        }
    }
}

impl From<OpenAIError> for Error {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::ApiError(ref api) if is_authentication_failure(api) => {
                Self::Authentication(api.message.clone())
            }
            other => Self::Upstream(other.to_string()),
        }
    }
}

fn is_authentication_failure(api: &async_openai::error::ApiError) -> bool {
    matches!(
        api.code.as_deref(),
        Some("invalid_api_key") | Some("invalid_authentication")
    ) || api.r#type.as_deref() == Some("authentication_error")
        || api.message.starts_with("You didn't provide an API key")
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn no_topic() -> Self {
        Self::Validation(NO_TOPIC_MESSAGE.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Authentication(_) => ErrorKind::Authentication,
            _ => ErrorKind::Upstream,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication | ErrorKind::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of the JSON response.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Authentication => INVALID_API_KEY_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}
