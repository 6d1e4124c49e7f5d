use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for StorefrontError {
    fn from(err: confique::Error) -> Self {
        StorefrontError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
