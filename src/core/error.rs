use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Team sizes must be positive integers, got {0}")]
    InvalidTeamSize(i64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuestError>;
