use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

pub type Result<T> = std::result::Result<T, ContactError>;
