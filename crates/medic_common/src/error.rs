//! Error types for Medic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedicError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MedicError {
    pub fn code(&self) -> i32 {
        match self {
            MedicError::InvalidInput(_) => -32602,
            MedicError::Pattern(_) => -32001,
            MedicError::Config(_) => -32002,
            MedicError::Io(_) => -32006,
            MedicError::Json(_) => -32700,
        }
    }
}

pub type Result<T> = std::result::Result<T, MedicError>;
