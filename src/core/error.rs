use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl NavError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        NavError::InvalidArgument(msg.into())
    }
}
