use thiserror::Error;
use reqwest::Error as ReqwestError;
use serde_json::Error as JsonError;
use std::io::Error as IoError;
use std::time::Duration;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] JsonError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ChatError {
    /// True when the request was cancelled by the timeout guard.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatError::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
