pub mod config;
pub mod error;
pub mod llm;
pub mod questions;
pub mod server;

pub use error::{Error, ErrorKind, Result};
