//! Error types for the sauti synthesis pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing --text or --output")]
    MissingArguments,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
