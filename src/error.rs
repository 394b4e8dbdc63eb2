use std::io;

use thiserror::Error;

use crate::harness::EstimateError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Estimate(#[from] EstimateError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        BenchError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
