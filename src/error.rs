use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Serial port {port} unavailable: {reason}")]
    SerialUnavailable { port: String, reason: String },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("Communication error: {0}")]
    Communication(String),
}

pub type SendResult<T> = std::result::Result<T, SendError>;
