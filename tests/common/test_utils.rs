use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use question_service::{
    config::{Config, LlmConfig, LogsConfig, Mode, ServerConfig},
    questions::QuestionGenerator,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::{path::PathBuf, sync::Arc};
use tempfile::TempDir;
use tokio::fs;

pub const SAMPLE_INDEX_HTML: &str =
    "<!DOCTYPE html>\n<html><body><h1>Questions \u{2753}</h1></body></html>\n";

/// Create a test configuration with sensible defaults
pub fn create_test_config(mode: Mode, index_path: &str) -> Config {
    Config {
        mode,
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            index_path: index_path.to_string(),
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: String::new(),
            api_key: "test-api-key".to_string(),
        },
    }
}

/// Create a temporary directory holding an index page
pub async fn create_index_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let index_path = temp_dir.path().join("index.html");
    fs::write(&index_path, SAMPLE_INDEX_HTML).await.unwrap();
    (temp_dir, index_path)
}

/// Demo-mode app serving a temporary index page
pub async fn create_demo_app() -> (Router, TempDir) {
    let (temp_dir, index_path) = create_index_dir().await;
    let config = create_test_config(Mode::Demo, &index_path.to_string_lossy());
    (server::router(&config), temp_dir)
}

/// App wired to an arbitrary generator
pub fn create_app_with_generator(generator: Arc<dyn QuestionGenerator>) -> Router {
    server::router_with_state(AppState {
        generator,
        index_path: Arc::new(PathBuf::from("does-not-exist.html")),
    })
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
mode: live
server:
  host: "127.0.0.1"
  port: 8081
  index_path: "public/index.html"
  logs:
    level: "debug"
llm:
  base_url: "http://localhost:4010/v1"
  api_key: "sk-from-file"
"#;
