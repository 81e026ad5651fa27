use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("POST failed: {0}")]
    Status(StatusCode),
    #[error("malformed counter response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CounterError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}
